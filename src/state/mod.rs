//! Application state: value types, the selection model, and the `AppState` container.

pub mod app_state;
pub mod selection;
pub mod types;

pub use app_state::{AppState, InstanceStatus};
pub use selection::{DiskSelection, SelectedConfigIds, SelectionEntry};
pub use types::{Config, ConfigId, Device, Disk, DiskId, Focus, Image};
