pub mod blocks;
pub mod cli;
pub mod config;
pub mod error;
pub mod pages;
pub mod render;
pub mod validate;

pub use blocks::{load_blocks, load_page, Block, Card, Page};
pub use config::SiteConfig;
pub use error::{BlockError, Result};
pub use pages::PageIndex;
pub use render::{render_block, render_body, render_card, render_page};
pub use validate::{ensure_valid, validate_blocks};
