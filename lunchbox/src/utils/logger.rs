//! Logging setup
//!
//! fmt subscriber on stderr, or a daily rolling file when a log directory is
//! configured and exists. `RUST_LOG` directives override the level.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional level and log directory
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "lunchbox");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.with_writer(std::io::stderr).init();
}

/// `RUST_LOG` when set, otherwise `log_level`
fn env_filter(log_level: Option<&str>) -> EnvFilter {
    let level = parse_level(log_level.unwrap_or("info"));
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

/// Unknown levels fall back to `info`
fn parse_level(level: &str) -> tracing::Level {
    level.trim().parse().unwrap_or(tracing::Level::INFO)
}
