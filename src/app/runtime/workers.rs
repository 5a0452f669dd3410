use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::DataSource;
use crate::store::{ImageAction, request_images};

use super::channels::InstanceResult;

/// What: Spawn the worker that loads disks and configurations on request.
///
/// Inputs:
/// - `source`: Where listings come from.
/// - `req_rx`: Instance ids to load.
/// - `res_tx`: Channel receiving each load outcome.
///
/// Details:
/// - Requests are served one at a time; the loop ends when either channel closes.
pub fn spawn_instance_worker(
    source: DataSource,
    mut req_rx: mpsc::UnboundedReceiver<u64>,
    res_tx: mpsc::UnboundedSender<InstanceResult>,
) {
    tokio::spawn(async move {
        while let Some(id) = req_rx.recv().await {
            tracing::info!(instance_id = id, source = %source.describe(), "loading instance");
            let res = source.load_instance(id).await;
            if let Err(e) = &res {
                tracing::warn!(instance_id = id, error = %e, "instance load failed");
            }
            if res_tx.send(res).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the worker that runs the image request flow.
///
/// Inputs:
/// - `source`: Where images come from.
/// - `req_rx`: Unit requests; each triggers one full fetch.
/// - `action_tx`: Channel feeding the image reducer.
///
/// Details:
/// - Requests arriving during a fetch are coalesced into a single follow-up fetch.
pub fn spawn_images_worker(
    source: DataSource,
    mut req_rx: mpsc::UnboundedReceiver<()>,
    action_tx: mpsc::UnboundedSender<ImageAction>,
) {
    tokio::spawn(async move {
        while req_rx.recv().await.is_some() {
            while req_rx.try_recv().is_ok() {}
            let _ = request_images(source.load_images(), &action_tx).await;
            if action_tx.is_closed() {
                break;
            }
        }
    });
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is checked regularly
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
