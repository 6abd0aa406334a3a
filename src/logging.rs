//! Logging setup
//!
//! Everything logs through the `log` facade. In TUI mode the output goes to a
//! file so it never draws over the dashboard.

use log::LevelFilter;
use std::env;
use std::fs::OpenOptions;
use std::path::Path;

pub fn get_rust_log_level() -> LevelFilter {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LevelFilter {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(get_rust_log_level())
        .format_timestamp_secs();
    builder
}

/// Logs to stderr. Used by the headless commands.
pub fn init_stderr() {
    let _ = builder().try_init();
}

/// Logs to `path`, appending. Used while the dashboard owns the terminal.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = builder()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_rust_log_level("info"), LevelFilter::Info);
        assert_eq!(parse_rust_log_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_rust_log_level("WARNING"), LevelFilter::Warn);
        assert_eq!(parse_rust_log_level("error"), LevelFilter::Error);
        assert_eq!(parse_rust_log_level("trace"), LevelFilter::Trace);
        assert_eq!(parse_rust_log_level("off"), LevelFilter::Off);

        // Module-specific formats use the first directive
        assert_eq!(parse_rust_log_level("budget_dashboard=debug"), LevelFilter::Debug);
        assert_eq!(
            parse_rust_log_level("budget_dashboard=debug,hyper=info"),
            LevelFilter::Debug
        );

        assert_eq!(parse_rust_log_level("invalid"), LevelFilter::Info);
    }

    #[test]
    fn test_init_file_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("dashboard.log");
        init_file(&path).unwrap();
        assert!(path.exists());
    }
}
