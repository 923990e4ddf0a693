//! Renderer Module
//!
//! Turns a [`FrameBuffer`] into terminal output.
//!
//! - [`DiffRenderer`]: alternate screen, only changed cells
//! - [`InlineRenderer`]: normal buffer, previous frame erased and redrawn
//!
//! Both batch a frame into an [`OutputBuffer`] and emit escape codes through
//! a [`StatefulCellRenderer`] that skips redundant cursor moves and colors.

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod inline;
pub mod output;

pub use buffer::{FrameBuffer, Pen};
pub use diff::DiffRenderer;
pub use inline::InlineRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
