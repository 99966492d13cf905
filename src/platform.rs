//! Platform-specific configuration

/// Submit shortcut display for the status bar
/// Ctrl+S is used on all platforms since Cmd combinations rarely reach
/// terminal applications on macOS
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
