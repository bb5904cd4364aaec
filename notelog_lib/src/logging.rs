use std::io::BufWriter;
use std::path::Path;

use fs_err as fs;
use tracing::metadata::LevelFilter;
use tracing::*;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter, fmt, EnvFilter};

use crate::error::NotelogError;

/// Installs the global subscriber.
///
/// Warnings and up always go to stderr (overridable via `RUST_LOG`). With a
/// `log_file`, DEBUG and up for `target` is also written there; keep the
/// returned guard alive until the program exits so it gets flushed.
pub fn setup_logging(
    log_file: Option<&Path>,
    target: &str,
) -> Result<Option<WorkerGuard>, NotelogError> {
    let stderr_log = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        );

    let (file_log, guard) = match log_file {
        Some(path) => {
            let f = fs::File::create(path).map_err(|_| NotelogError::LogSetupFailed {
                summary: "failed to create log file".to_string(),
                details: Some(format!("log file path: `{}`", path.display())),
            })?;
            let (writer, guard) = tracing_appender::non_blocking(BufWriter::new(f));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter::Targets::new().with_target(target, Level::DEBUG));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_log)
        .with(file_log)
        .try_init()
        .map_err(|e| NotelogError::LogSetupFailed {
            summary: "failed to register global default tracing subscriber".to_string(),
            details: Some(format!("{e}")),
        })?;

    if let Some(path) = log_file {
        debug!("writing logs to {}", path.display());
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_file_fails_before_install() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("notelog.log");

        let err = setup_logging(Some(&path), "notelog").unwrap_err();
        assert!(matches!(err, NotelogError::LogSetupFailed { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
