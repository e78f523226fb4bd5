use std::path::Path;

use hgsync::config::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("✗ Error: {}", err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
