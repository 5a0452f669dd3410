//! clonedeck binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

use clonedeck::{app, args, theme};

/// Log timestamp formatter: `YYYY-MM-DD-T HH:MM:SS` in local time.
struct CloneDeckTimer;

impl tracing_subscriber::fmt::time::FormatTime for CloneDeckTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Handle used to change the log filter once settings are known.
type FilterHandle = reload::Handle<EnvFilter, Registry>;

static LOG_FILTER: OnceLock<FilterHandle> = OnceLock::new();

/// Filter for `level`, unless `RUST_LOG` overrides it.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// What: Initialize tracing to `~/.config/clonedeck/logs/clonedeck.log`.
///
/// Inputs:
/// - `level`: Provisional filter when `RUST_LOG` is unset; see [`set_log_level`].
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
/// - Runs before settings are read so their parse warnings are recorded.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("clonedeck.log");
    let (filter, handle) = reload::Layer::new(log_filter(level));
    let _ = LOG_FILTER.set(handle);
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(non_blocking)
                        .with_timer(CloneDeckTimer),
                )
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(true)
                        .with_writer(std::io::stderr)
                        .with_timer(CloneDeckTimer),
                )
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// Switch the active log filter to `level` (still subject to `RUST_LOG`).
fn set_log_level(level: &str) {
    if let Some(handle) = LOG_FILTER.get()
        && let Err(e) = handle.reload(log_filter(level))
    {
        tracing::warn!(error = %e, "failed to apply log level");
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(
        &cli,
        &theme::Settings::default(),
    ));
    let settings = theme::settings();
    set_log_level(&args::determine_log_level(&cli, &settings));

    let source = match args::build_source(&cli, &settings) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "cannot set up data source");
            eprintln!("clonedeck: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    if cli.list_images {
        return match args::handle_list_images(&source).await {
            Ok(n) => {
                tracing::info!(count = n, "images listed");
                std::process::ExitCode::SUCCESS
            }
            Err(errors) => {
                for e in &errors {
                    eprintln!("clonedeck: {}", e.reason);
                }
                std::process::ExitCode::FAILURE
            }
        };
    }

    let page_size = cli.page_size.unwrap_or(settings.page_size);
    tracing::info!(
        instance_id = ?cli.instance_id,
        source = %source.describe(),
        page_size,
        "clonedeck starting"
    );
    let opts = app::RunOptions {
        instance_id: cli.instance_id,
        source,
        settings,
        page_size,
    };
    let code = match app::run(opts).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Application error");
            std::process::ExitCode::FAILURE
        }
    };
    tracing::info!("clonedeck exited");
    code
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::{EnvFilter, fmt, reload};

    /// In-memory log sink shared with the test.
    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    /// What: Settings warnings are recorded by the provisional filter and the
    /// final level applies afterwards
    ///
    /// - Input: `page_size = 33` parsed under `info`, then the filter reloaded to `error`
    /// - Output: The page size warning is logged; a later warning is filtered out
    fn settings_warnings_logged_before_final_level() {
        let sink = Sink::default();
        let writer = sink.clone();
        let (filter, handle) = reload::Layer::new(EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );
        tracing::subscriber::with_default(subscriber, || {
            let s = clonedeck::theme::settings_from_str("page_size = 33\n");
            assert_eq!(s.page_size, 25);
            handle
                .reload(EnvFilter::new("error"))
                .expect("filter reloads");
            tracing::warn!("after final level");
        });
        let out = String::from_utf8(
            sink.0
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone(),
        )
        .expect("utf8 log output");
        assert!(out.contains("ignoring unsupported page_size"), "{out}");
        assert!(!out.contains("after final level"), "{out}");
    }

    /// What: FormatTime impl writes a non-empty timestamp without panicking
    #[test]
    fn clonedeck_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::CloneDeckTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }
}
