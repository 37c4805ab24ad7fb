//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::MAX_ZOOM;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [grid] section
    if let Some(section) = ini.section(Some("grid")) {
        if let Some(v) = section.get("default_zoom") {
            let zoom = v
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|z| *z <= MAX_ZOOM)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "grid".to_string(),
                    key: "default_zoom".to_string(),
                    value: v.to_string(),
                    reason: format!("must be an integer between 0 and {}", MAX_ZOOM),
                })?;
            config.grid.default_zoom = zoom;
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.directory = expand_tilde(v);
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() || v.contains(['/', '\\']) {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "file".to_string(),
                    value: v.to_string(),
                    reason: "must be a plain file name".to_string(),
                });
            }
            config.logging.file = v.to_string();
        }
    }

    Ok(config)
}

/// Expand a leading `~` to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_is_default() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_parses_all_sections() {
        let config = parse(
            "[grid]\ndefault_zoom = 17\n\n\
             [output]\ndirectory = /tmp/layers\n\n\
             [logging]\ndirectory = /tmp/logs\nfile = grid.log\n",
        )
        .unwrap();

        assert_eq!(config.grid.default_zoom, 17);
        assert_eq!(config.output.directory, PathBuf::from("/tmp/layers"));
        assert_eq!(config.logging.directory, PathBuf::from("/tmp/logs"));
        assert_eq!(config.logging.file, "grid.log");
    }

    #[test]
    fn test_rejects_bad_zoom() {
        for value in ["abc", "-1", "31", "300"] {
            let result = parse(&format!("[grid]\ndefault_zoom = {}\n", value));
            assert!(
                matches!(result, Err(ConfigFileError::InvalidValue { ref key, .. }) if key == "default_zoom"),
                "zoom '{}' should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_rejects_log_file_with_path() {
        let result = parse("[logging]\nfile = logs/grid.log\n");
        assert!(matches!(result, Err(ConfigFileError::InvalidValue { .. })));
    }

    #[test]
    fn test_empty_directory_keeps_default() {
        let config = parse("[output]\ndirectory = \n").unwrap();
        assert_eq!(config.output.directory, PathBuf::from("."));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/layers");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("layers"));
        }
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
