//! Markdown rendering
//!
//! Documents are assembled section by section from already extracted rows;
//! nothing here touches the file system.

pub mod markdown;
mod composition;
mod xrd;

pub use composition::{UNKNOWN_NAME, render_composition};
pub use xrd::render_xrd;
