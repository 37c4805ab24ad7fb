//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init`.

use clap::Subcommand;
use std::path::Path;
use tilegrid::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let path = config_file_path();
    match command {
        ConfigCommands::Path => run_path(&path),
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Init => run_init(&path),
    }
}

fn run_path(path: &Path) -> Result<(), CliError> {
    println!("{}", path.display());
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    for line in describe(&config) {
        println!("{}", line);
    }
    Ok(())
}

fn run_init(path: &Path) -> Result<(), CliError> {
    if ConfigFile::ensure_exists_at(path)? {
        println!("Created {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
    }
    Ok(())
}

/// Render the effective settings as `section.key = value` lines.
fn describe(config: &ConfigFile) -> Vec<String> {
    vec![
        format!("grid.default_zoom = {}", config.grid.default_zoom),
        format!("output.directory = {}", config.output.directory.display()),
        format!("logging.directory = {}", config.logging.directory.display()),
        format!("logging.file = {}", config.logging.file),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_describe_lists_every_key() {
        let lines = describe(&ConfigFile::default());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "grid.default_zoom = 14");
        assert_eq!(lines[3], "logging.file = tilegrid.log");
    }

    #[test]
    fn test_init_then_show() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");

        run_init(&path).unwrap();
        assert!(path.exists());
        run_init(&path).unwrap();
        run_show(&path).unwrap();
    }

    #[test]
    fn test_show_reports_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[grid]\ndefault_zoom = high\n").unwrap();

        let result = run_show(&path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
