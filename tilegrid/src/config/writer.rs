//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[grid]
; Zoom level used when a command does not pass --zoom (0-30)
default_zoom = {}

[output]
; Directory that receives generated GeoJSON layers
directory = {}

[logging]
; Directory and file name for the log file
directory = {}
file = {}
"#,
        config.grid.default_zoom,
        path_to_string(&config.output.directory),
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
