//! Layout Module
//!
//! Flexbox page layout through [Taffy](https://github.com/DioxusLabs/taffy)
//! and text measurement in terminal cells.
//!
//! # Reactivity
//!
//! `compute_page_layout` is pure. The pipeline calls it from a derived that
//! reads the terminal size and the visible list, so the layout re-runs when
//! either changes.

pub mod page;
pub mod text_measure;

pub use page::*;
pub use text_measure::{char_width, grapheme_width, string_width, take_width, truncate_text};
