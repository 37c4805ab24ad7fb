//! Configuration settings structs and defaults.

use std::path::PathBuf;

use super::file::config_directory;

/// Zoom level used when a request does not name one.
pub const DEFAULT_ZOOM: u8 = 14;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "tilegrid.log";

/// Complete user configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub grid: GridSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// `[grid]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    /// Zoom level used when none is given on the command line.
    pub default_zoom: u8,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Directory that receives generated layers when no explicit path is given.
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: config_directory().join("logs"),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
