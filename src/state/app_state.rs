//! Central `AppState` container owned by the UI task.

use crate::logic::clone_flow::CloneFlow;
use crate::logic::paginate::Paginator;
use crate::state::types::{Config, Disk, Focus};
use crate::store::{ImageAction, ImagesState, reduce};
use crate::theme::KeyMap;

/// Loading status of the source instance's disks and configurations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InstanceStatus {
    /// No instance requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Disks and configurations are available.
    Ready,
    /// Fetch failed with this message.
    Failed(String),
}

/// Application state shared by the event and UI layers.
///
/// Mutated only on the UI task; background workers talk to it through channels.
#[derive(Debug)]
pub struct AppState {
    /// Instance whose disks are being picked, when known.
    pub instance_id: Option<u64>,
    /// Loading status of disks and configurations.
    pub instance_status: InstanceStatus,
    /// Disks, configurations, and the user's picks.
    pub flow: CloneFlow,
    /// Image collection store.
    pub images: ImagesState,
    /// Pane receiving keyboard input.
    pub focus: Focus,
    /// Pagination of the disk table.
    pub disk_pager: Paginator,
    /// Pagination of the image table.
    pub image_pager: Paginator,
    /// Cursor row within the current disk page.
    pub disk_cursor: usize,
    /// Cursor row within the configuration list.
    pub config_cursor: usize,
    /// Cursor row within the current image page.
    pub image_cursor: usize,
    /// Active key bindings.
    pub keymap: KeyMap,
    /// Whether the clone summary pane is drawn.
    pub show_summary_pane: bool,
    /// One-line message for the status bar.
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            instance_id: None,
            instance_status: InstanceStatus::Idle,
            flow: CloneFlow::default(),
            images: ImagesState::default(),
            focus: Focus::default(),
            disk_pager: Paginator::default(),
            image_pager: Paginator::default(),
            disk_cursor: 0,
            config_cursor: 0,
            image_cursor: 0,
            keymap: KeyMap::default(),
            show_summary_pane: true,
            status: None,
        }
    }
}

impl AppState {
    /// What: Create state using the given settings.
    ///
    /// Inputs:
    /// - `settings`: Loaded user settings.
    /// - `page_size`: Rows per page for both tables.
    #[must_use]
    pub fn with_settings(settings: &crate::theme::Settings, page_size: usize) -> Self {
        Self {
            disk_pager: Paginator::new(page_size),
            image_pager: Paginator::new(page_size),
            keymap: settings.keymap.clone(),
            show_summary_pane: settings.show_summary_pane,
            ..Self::default()
        }
    }

    /// What: Install freshly fetched disks and configurations.
    ///
    /// Inputs:
    /// - `disks`: Disks of the source instance.
    /// - `configs`: Configuration profiles of the source instance.
    ///
    /// Details:
    /// - Rebuilds the selection model from scratch and resets cursors.
    pub fn set_instance(&mut self, disks: Vec<Disk>, configs: Vec<Config>) {
        self.flow = CloneFlow::new(disks, configs);
        self.disk_pager.set_count(self.flow.disks().len());
        self.disk_pager.handle_page_change(1);
        self.disk_cursor = 0;
        self.config_cursor = 0;
        self.instance_status = InstanceStatus::Ready;
    }

    /// What: Feed an image store action through the reducer.
    ///
    /// Inputs:
    /// - `action`: Action received from a worker or the event layer.
    ///
    /// Details:
    /// - Keeps the image paginator and cursor consistent with the new collection.
    pub fn apply_image_action(&mut self, action: ImageAction) {
        reduce(&mut self.images, action);
        self.image_pager.set_count(self.images.entities.len());
        let rows = self.image_pager.slice(&self.images.entities).len();
        self.image_cursor = self.image_cursor.min(rows.saturating_sub(1));
    }

    /// Number of rows on the current disk page.
    #[must_use]
    pub fn disk_rows_on_page(&self) -> usize {
        self.disk_pager.slice(self.flow.disks()).len()
    }

    /// Number of rows on the current image page.
    #[must_use]
    pub fn image_rows_on_page(&self) -> usize {
        self.image_pager.slice(&self.images.entities).len()
    }
}
