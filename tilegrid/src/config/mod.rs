//! Configuration file support.
//!
//! User settings live in `~/.tilegrid/config.ini`:
//!
//! ```ini
//! [grid]
//! default_zoom = 14
//!
//! [output]
//! directory = ~/tilegrid
//!
//! [logging]
//! directory = ~/.tilegrid/logs
//! file = tilegrid.log
//! ```
//!
//! Missing files and missing keys fall back to defaults.

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, GridSettings, LoggingSettings, OutputSettings, DEFAULT_LOG_FILE, DEFAULT_ZOOM,
};
