use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::sources::DataSource;
use crate::state::{AppState, InstanceStatus};
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod workers;

use channels::{Channels, InstanceResult};
use workers::{spawn_event_thread, spawn_images_worker, spawn_instance_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Inputs of one TUI session.
#[derive(Debug)]
pub struct RunOptions {
    /// Instance to load on start, if any.
    pub instance_id: Option<u64>,
    /// Where listings come from.
    pub source: DataSource,
    /// Loaded user settings.
    pub settings: Settings,
    /// Rows per page for both tables.
    pub page_size: usize,
}

/// What: Apply a finished instance load to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `res`: Load outcome from the instance worker.
fn handle_instance_result(app: &mut AppState, res: InstanceResult) {
    match res {
        Ok((disks, configs)) => {
            tracing::info!(
                disks = disks.len(),
                configs = configs.len(),
                "instance loaded"
            );
            app.set_instance(disks, configs);
        }
        Err(e) => {
            app.instance_status = InstanceStatus::Failed(e.to_string());
        }
    }
}

/// What: Open a resource that needs the terminal already set up.
///
/// Inputs:
/// - `open`: Fallible constructor (the ratatui terminal).
/// - `restore`: Undoes terminal setup; only called when `open` fails.
///
/// Output:
/// - The opened value, or the open error after the terminal was restored.
///
/// # Errors
/// - Propagates the error returned by `open`.
fn open_or_restore<T, E>(
    open: impl FnOnce() -> std::result::Result<T, E>,
    restore: impl FnOnce(),
) -> Result<T>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    open().map_err(|e| {
        restore();
        tracing::error!("terminal could not be opened; restored terminal state");
        e.into()
    })
}

/// What: Run the clonedeck TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Instance, data source, settings, and page size for this session.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Requests the instance listings (when an id is given) and the image list on start.
/// - `CLONEDECK_TEST_HEADLESS=1` skips the terminal and input thread; the loop then
///   ends once the instance and the first image fetch have settled.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var("CLONEDECK_TEST_HEADLESS").ok().as_deref() == Some("1");
    let mut terminal = if headless {
        None
    } else {
        setup_terminal()?;
        Some(open_or_restore(
            || Terminal::new(CrosstermBackend::new(std::io::stdout())),
            || {
                let _ = restore_terminal();
            },
        )?)
    };

    let mut app = AppState::with_settings(&opts.settings, opts.page_size);
    app.instance_id = opts.instance_id;

    let mut channels = Channels::new();
    if let Some(rx) = channels.instance_req_rx.take() {
        spawn_instance_worker(opts.source.clone(), rx, channels.instance_res_tx.clone());
    }
    if let Some(rx) = channels.images_req_rx.take() {
        spawn_images_worker(opts.source, rx, channels.image_action_tx.clone());
    }
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    if let Some(id) = opts.instance_id {
        app.instance_status = InstanceStatus::Loading;
        let _ = channels.instance_req_tx.send(id);
    }
    let _ = channels.images_req_tx.send(());

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.images_req_tx) {
                    break;
                }
            }
            Some(res) = channels.instance_res_rx.recv() => {
                handle_instance_result(&mut app, res);
            }
            Some(action) = channels.image_action_rx.recv() => {
                app.apply_image_action(action);
            }
            () = tokio::time::sleep(std::time::Duration::from_millis(250)), if headless => {
                let images_settled = !app.images.loading
                    && (app.images.last_updated.is_some() || app.images.error.is_some());
                if app.instance_status != InstanceStatus::Loading && images_settled {
                    break;
                }
            }
        }
    }

    tracing::debug!("main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
