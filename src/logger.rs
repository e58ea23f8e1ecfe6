// src/logger.rs
use std::{path::Path, sync::OnceLock};
use tracing_subscriber::{EnvFilter, fmt};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Route `tracing` output for the decoder into an append-only log file.
///
/// `filter` uses `EnvFilter` syntax, for example `nnuebin=debug,nnuebin::packed=trace`.
/// A set `RUST_LOG` takes precedence. Only the first successful call installs a
/// subscriber; an unopenable log file is reported as an I/O error.
pub fn init_logging<P: AsRef<Path>>(path: P, filter: &str) -> std::io::Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    INIT.get_or_init(|| {
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        // Dropping the guard would stop the writer thread and lose buffered lines.
        let _ = GUARD.set(guard);

        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(non_blocking)
            .finish();

        // A host program may already own the global subscriber.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
    Ok(())
}
