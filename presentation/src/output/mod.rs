//! Output formatting

pub mod console;

/// Globally enable or disable colored output.
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
