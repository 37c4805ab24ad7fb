//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;
use tilegrid::config::ConfigFileError;
use tilegrid::layer::LayerError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Failed to create the grid layer
    Layer(LayerError),
    /// Failed to open the output file
    Output {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Argument value outside what the command accepts
    InvalidArgument(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Layer(LayerError::Grid(_)) = self {
            eprintln!();
            eprintln!("Bounding boxes are given in WGS84 degrees:");
            eprintln!("  --min-lon <WEST> --min-lat <SOUTH> --max-lon <EAST> --max-lat <NORTH>");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Layer(e) => write!(f, "Failed to create grid: {}", e),
            CliError::Output { path, error } => {
                write!(f, "Failed to open output '{}': {}", path.display(), error)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Layer(e) => Some(e),
            CliError::Output { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<LayerError> for CliError {
    fn from(e: LayerError) -> Self {
        CliError::Layer(e)
    }
}
