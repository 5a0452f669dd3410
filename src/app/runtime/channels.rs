use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::FetchError;
use crate::state::types::{Config, Disk};
use crate::store::ImageAction;

/// Outcome of loading one instance's disks and configurations.
pub type InstanceResult = Result<(Vec<Disk>, Vec<Config>), FetchError>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Instance ids to load.
    pub instance_req_tx: mpsc::UnboundedSender<u64>,
    /// Taken by the instance worker.
    pub instance_req_rx: Option<mpsc::UnboundedReceiver<u64>>,
    /// Instance load outcomes.
    pub instance_res_tx: mpsc::UnboundedSender<InstanceResult>,
    /// Receiver side of `instance_res_tx`.
    pub instance_res_rx: mpsc::UnboundedReceiver<InstanceResult>,
    /// Image fetch requests.
    pub images_req_tx: mpsc::UnboundedSender<()>,
    /// Taken by the image worker.
    pub images_req_rx: Option<mpsc::UnboundedReceiver<()>>,
    /// Actions for the image reducer.
    pub image_action_tx: mpsc::UnboundedSender<ImageAction>,
    /// Receiver side of `image_action_tx`.
    pub image_action_rx: mpsc::UnboundedReceiver<ImageAction>,
}

impl Channels {
    /// What: Create every channel pair used by the runtime.
    ///
    /// Details:
    /// - Request receivers are wrapped in `Option` so workers can take ownership of them.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (instance_req_tx, instance_req_rx) = mpsc::unbounded_channel();
        let (instance_res_tx, instance_res_rx) = mpsc::unbounded_channel();
        let (images_req_tx, images_req_rx) = mpsc::unbounded_channel();
        let (image_action_tx, image_action_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            instance_req_tx,
            instance_req_rx: Some(instance_req_rx),
            instance_res_tx,
            instance_res_rx,
            images_req_tx,
            images_req_rx: Some(images_req_rx),
            image_action_tx,
            image_action_rx,
        }
    }
}
