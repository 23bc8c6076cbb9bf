//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the filter is built from the configured
//! level. When `log_dir` exists, output goes to a daily rolling file instead
//! of stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "tracker-server";

fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tracker_server={log_level},tower_http={log_level}"))
    })
}

/// Initialize the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logger("debug", None);
        init_logger("info", Some("/definitely/not/a/dir"));
    }
}
