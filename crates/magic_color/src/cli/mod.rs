//! Command-line interface module.

mod commands;
mod gallery;
mod session;
mod workflow;

pub use commands::{Cli, Commands};
pub use gallery::{export_page, list_pages, show_page};
pub use session::Session;
pub use workflow::{run_coloring, run_generation};
