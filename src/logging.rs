//! Tracing subscriber setup: stderr plus a daily rolling file when a data
//! directory is available.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const LOG_PREFIX: &str = "split-theme-switcher.log";

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init(default_level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let file = log_dir.and_then(|dir| {
        std::fs::create_dir_all(dir).ok()?;
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_PREFIX);
        Some(tracing_appender::non_blocking(appender))
    });

    let registry = Registry::default().with(env_filter).with(console_layer);
    let result = match file {
        Some((writer, guard)) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            registry
                .with(file_layer)
                .try_init()
                .map(|()| Some(guard))
        }
        None => registry.try_init().map(|()| None),
    };

    match result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Journalisation déjà initialisée: {e}");
            None
        }
    }
}
