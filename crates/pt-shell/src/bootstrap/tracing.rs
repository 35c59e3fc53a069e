//! Tracing configuration for Pet Thoughts
//!
//! Installs a `tracing-subscriber` registry with:
//! - an `EnvFilter` (RUST_LOG, then the configured level, then build-mode defaults)
//! - a stderr fmt layer, so log lines never interleave with the shell's stdout
//! - a non-blocking file layer writing `<logs dir>/pet-thoughts.log`

use std::path::Path;
use std::{fs, io, sync::OnceLock};

use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter, Layer};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "pet-thoughts.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug for everything, infra included
/// - **Production**: info
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev {
            "pt_infra=debug"
        } else {
            "pt_infra=info"
        }
        .to_string(),
    ]
}

fn build_env_filter(level_override: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level_override {
        Some(level) if !level.trim().is_empty() => EnvFilter::new(level),
        _ => EnvFilter::new(build_filter_directives(is_development()).join(",")),
    })
}

/// Initialize the tracing subscriber
///
/// Call once, before the session is launched. If the log file cannot be
/// opened, logging continues on stderr only.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: &Path, level_override: Option<&str>) -> anyhow::Result<()> {
    let env_filter = build_env_filter(level_override);

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    let console_layer = timestamped_layer(console_writer, cfg!(not(test)));
    let file_layer = file_writer.map(|writer| timestamped_layer(writer, false));

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
fn timestamped_layer<S, W>(writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer)
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
