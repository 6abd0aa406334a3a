//! Messaging for session lifecycle

// ANSI Color Codes for session messages
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Print session exit message
pub fn print_session_exit_success() {
    println!(
        "{}[SUCCESS]{} Budget dashboard exited successfully",
        COLOR_SUCCESS, COLOR_RESET
    );
}
