//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod utils;

// Re-export commonly used items
pub use definition::Args;
pub use list::handle_list_images;
pub use utils::{build_source, determine_log_level, resolve_token};
