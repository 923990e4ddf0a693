//! Reactive render pipeline.
//!
//! ```text
//! browser signals ─┐
//! terminal size ───┼→ layout derived → frame derived → render effect
//! theme, ui state ─┘
//! ```
//!
//! The two deriveds are pure. Only the render effect touches the terminal
//! and records the grid overflow for scrolling.

pub mod frame_buffer_derived;
pub mod layout_derived;
pub mod mount;
pub mod terminal;

pub use frame_buffer_derived::{FrameResult, PageView, create_frame_buffer_derived, paint_page};
pub use layout_derived::create_layout_derived;
pub use mount::{MountHandle, MountOptions, mount, render_once, run, tick, unmount};
pub use terminal::{
    detect_terminal_size, render_mode, set_render_mode, set_terminal_size, terminal_height, terminal_width,
};
