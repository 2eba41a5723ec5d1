//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod extract;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use convert::{execute_convert, print_stats};
pub use extract::execute_extract;
pub use models::{ConvertArgs, ConvertStats, ExtractArgs};
pub use utils::{default_output_path, display_schema};
