//! Painters for the parts of the page.
//!
//! Each painter draws one part into a [`FrameBuffer`](crate::renderer::FrameBuffer)
//! at a rectangle produced by the layout, using a resolved theme palette.
//! Painters hold no state; everything they show is passed in.

pub mod card;
pub mod chrome;
pub mod search_box;
pub mod select;

pub use card::paint_card;
pub use chrome::{paint_footer, paint_header};
pub use search_box::paint_search_box;
pub use select::paint_cuisine_select;
