//! `pull` and `push`

use std::path::{Path, PathBuf};

use anyhow::Result;
use hgsync::application::SyncUseCase;
use hgsync::config::{self, Config};
use hgsync::domain::entities::TransferOptions;
use hgsync::domain::services::{PlanRequest, Planner};
use hgsync::domain::value_objects::{SyncDirection, Verbosity};
use hgsync::error::HgsyncError;
use hgsync::infrastructure::{RsyncTransfer, ZipArchiver};

use crate::cli::SyncArgs;
use crate::ui::json::{emit, plan_event, report_event};
use crate::ui::output::print_config_warnings;
use crate::ui::views::plan::render_plan;
use crate::ui::views::summary::{render_archive, render_transfer};

/// Run one sync and return the process exit code
pub fn cmd_sync(
    direction: SyncDirection,
    args: &SyncArgs,
    archive: Option<PathBuf>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<i32> {
    let loaded = config::load(config_path).map_err(HgsyncError::from)?;
    if let Some(path) = &loaded.path {
        if !json {
            print_config_warnings(path, &loaded.warnings);
        }
    }
    let config = loaded.config;

    let request = plan_request(direction, args, archive, &config);
    let layout = config.layout().map_err(HgsyncError::from)?;
    let planner = Planner::new(config.roots(args.local), layout);
    let plan = planner.plan(&request).map_err(HgsyncError::from)?;

    let tool = RsyncTransfer::new(&config.transfer.rsync, &config.transfer.nice);

    if plan.is_dry() {
        let command = tool.command_line(&plan);
        if json {
            emit(plan_event(&plan, &command))?;
        } else {
            println!("{}", render_plan(&plan, &command));
        }
        return Ok(0);
    }

    // rsync shares our process group and receives Ctrl+C itself; staying
    // alive lets us report its exit status.
    if let Err(e) = ctrlc::set_handler(|| tracing::warn!("interrupted, waiting for rsync to exit")) {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
    }

    let use_case = SyncUseCase::new(tool, ZipArchiver::new());
    let report = use_case.execute(&plan).map_err(HgsyncError::from)?;

    if json {
        emit(report_event(&report))?;
        return Ok(report.exit_code());
    }

    let quiet = plan.options.verbosity.is_quiet();
    if let Some(line) = render_transfer(&report, &config.transfer.rsync) {
        if report.is_success() {
            if !quiet {
                println!("{}", line);
            }
        } else {
            eprintln!("{}", line);
        }
    }
    if let Some(line) = render_archive(&report.archive) {
        if report.archive.is_failed() {
            eprintln!("{}", line);
        } else if !quiet {
            println!("{}", line);
        }
    }

    Ok(report.exit_code())
}

/// Merge CLI flags over configuration into a plan request
fn plan_request(
    direction: SyncDirection,
    args: &SyncArgs,
    archive: Option<PathBuf>,
    config: &Config,
) -> PlanRequest {
    let verbosity = if args.debug {
        Verbosity::Debug
    } else if args.quiet {
        Verbosity::Quiet
    } else {
        config.output.verbosity
    };

    let mut options = TransferOptions::new()
        .with_verbosity(verbosity)
        .with_overwrite(args.overwrite)
        .with_yaml(args.yaml)
        .with_all(args.all)
        .with_niceness(args.niceness.unwrap_or(config.transfer.niceness));
    options.archive_path = archive;

    let mut request = PlanRequest::new(direction).with_options(options);
    request.project = args.project.clone();
    request.explicit_source = args.src.clone();
    request.explicit_destination = args.dst.clone();
    request
}
