//! Core non-UI logic split into modular submodules.

pub mod clone_flow;
pub mod paginate;
pub mod reconcile;
pub mod selection;

pub use clone_flow::{CloneFlow, CloneSummary};
pub use paginate::{DEFAULT_PAGE_SIZE, PAGE_SIZES, Paginator};
pub use reconcile::{DisplayState, display_state, is_config_selected};
pub use selection::{change_page, cycle_page_size, move_cursor};
