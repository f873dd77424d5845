mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_page, handle_render, handle_validate};
