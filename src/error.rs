//! Crate error type.
//!
//! Filtering and state updates never fail; errors only come from the
//! terminal host (I/O, layout, configuration).

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Terminal read/write failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Taffy rejected the page tree.
    #[error("layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    /// A theme name that matches no preset.
    #[error("unknown theme `{name}` (available: {list})", name = .0, list = crate::theme::preset_names().join(", "))]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, Error>;
