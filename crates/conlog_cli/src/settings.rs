//! Resolution of the configuration file and color choice.

use std::path::{Path, PathBuf};

use conlog::ColorChoice;
use conlog_config::{load_config, ConfigError, LogConfig, CONFIG_FILE_NAME};

use crate::GlobalArgs;

/// Loads the configuration named by `--config`, or `conlog.toml` from the
/// working directory when it exists, or an empty configuration.
pub fn load(global: &GlobalArgs) -> Result<LogConfig, ConfigError> {
    let cwd = std::env::current_dir()?;
    load_from(global.config.as_deref().map(Path::new), &cwd)
}

/// Same as [`load`], with the lookup directory made explicit.
pub fn load_from(explicit: Option<&Path>, dir: &Path) -> Result<LogConfig, ConfigError> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(LogConfig::default());
            }
            candidate
        }
    };
    load_config(&path)
}

/// `--color` wins over `[console] color`, which wins over auto-detection.
pub fn color_choice(global: &GlobalArgs, config: &LogConfig) -> ColorChoice {
    global
        .color
        .or(config.console.color)
        .unwrap_or_default()
}
