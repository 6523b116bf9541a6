// metaview-cli/src/config.rs
//
// Defines default configuration constants for the `metaview` command line,
// mirroring the library defaults.

pub const DEFAULT_PRIORITY_LEVEL: u8 = metaview_core::render::DEFAULT_PRIORITY_LEVEL;
pub const DEFAULT_MAX_VALUE_LENGTH: usize = metaview_core::render::DEFAULT_MAX_VALUE_LENGTH;

/// Environment variable that enables the ffprobe backend.
pub const FFPROBE_ENV_VAR: &str = "METAVIEW_FFPROBE";

/// Printed for a file whose fields are all above the selected priority level.
pub const PRIORITY_TOO_LOW_NOTE: &str = "(no metadata, priority may be too small)";
