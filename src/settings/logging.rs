use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
    path::{Path, PathBuf},
};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, RollingFileAppender},
};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, registry, EnvFilter};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOG_LEVEL, LOG_FILE,
};

fn log_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine project directories"))?;
    let directory = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;
    Ok(directory)
}

/// Always `<directory>/vcard-qr.log`, never rotated.
fn file_appender(directory: &Path) -> RollingFileAppender {
    rolling::never(directory, LOG_FILE)
}

/// Compact events on stderr, filtered by `RUST_LOG` (or `debug` when
/// `verbose`), plus every event as JSON in a single file under the platform
/// data directory.
///
/// Keep the returned guard alive until exit so the file writer flushes.
pub fn init_logger(verbose: bool) -> Result<WorkerGuard> {
    let directory = log_directory()?;

    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(&directory));

    let console_layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(IsTerminal::is_terminal(&stderr()))
        .with_level(true)
        .with_target(verbose)
        .without_time()
        .compact()
        .with_filter(env_filter);

    let json_layer = fmt::layer()
        .json()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .flatten_event(true)
        .with_filter(LevelFilter::DEBUG);

    registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to install the global logger")?;

    Ok(guard)
}
