//! Console messaging for the headless commands
//!
//! Coloured prefixes for outcomes printed outside the dashboard.

use crate::events::Event;
use crate::notifications::NotificationKind;

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    print!("\x1b[1;33m[INFO]\x1b[0m {}", title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Print CLI command error. Errors go to stderr.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("\x1b[1;31m[ERROR]\x1b[0m {}", title);
    if let Some(details) = details {
        eprintln!("\x1b[1;31m[ERROR]\x1b[0m Details: {}", details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    print!("\x1b[1;32m[SUCCESS]\x1b[0m {}", title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Prints a notification event with the prefix matching its kind.
/// Other events are not shown.
pub fn print_event(event: &Event) {
    if let Event::Notify { message, kind, .. } = event {
        match kind {
            NotificationKind::Success => print_success(message, ""),
            NotificationKind::Error => print_error(message, None),
        }
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}
