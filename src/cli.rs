use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// hgsync - mirror HGS model runs between a compute host and this machine
#[derive(Parser, Debug)]
#[command(name = "hgsync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Roots come from [remote]/[local] in the config file or HOST, HOST_ROOT, DATA_ROOT.")]
pub struct Cli {
    /// Config file (default: ~/.config/hgsync/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON summary instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bring model output back from the host
    Pull {
        #[command(flatten)]
        sync: SyncArgs,

        /// Zip archive to create or update after a successful pull
        /// (relative paths are placed next to the destination directory)
        #[arg(long, value_name = "PATH")]
        archive: Option<PathBuf>,
    },

    /// Send forcing data to the host
    Push {
        #[command(flatten)]
        sync: SyncArgs,
    },
}

/// Arguments shared by both directions
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Project identifier (directory name under HGS/)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Source, used verbatim (local path or host:path)
    #[arg(short, long = "src", value_name = "PATH")]
    pub src: Option<String>,

    /// Destination, used verbatim (local path or host:path)
    #[arg(short = 't', long = "dst", value_name = "PATH")]
    pub dst: Option<String>,

    /// nice adjustment for rsync (0 disables nice)
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-20..=19)
    )]
    pub niceness: Option<i32>,

    /// Only report errors
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,

    /// Print the rsync command and stop without transferring
    #[arg(short, long)]
    pub debug: bool,

    /// Re-send files even when size and mtime match
    #[arg(short, long)]
    pub overwrite: bool,

    /// Also transfer *.yaml files
    #[arg(short, long)]
    pub yaml: bool,

    /// Transfer everything (no filters)
    #[arg(short, long)]
    pub all: bool,

    /// Host root is a local path (no HOST prefix)
    #[arg(long)]
    pub local: bool,
}
