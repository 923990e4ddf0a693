//! # restaurant-browser
//!
//! Reactive terminal restaurant browser built on
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals).
//!
//! A fixed catalog is filtered by a free-text search and a cuisine
//! selection. Both are signals; the visible list is a derived over them, and
//! the page is laid out with taffy and painted through a single render
//! effect:
//!
//! ```text
//! search_term, selected_cuisine → visible → layout → frame → render effect
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The restaurant records
//! - [`cuisine`] - Cuisine selector options
//! - [`filter`] - Pure filter predicates and `compute_visible`
//! - [`state`] - Browser state, UI state, keyboard routing
//! - [`layout`] - Page layout (taffy) and text measurement
//! - [`primitives`] - Painters for header, controls, cards and footer
//! - [`renderer`] - Frame buffer and ANSI renderers
//! - [`pipeline`] - Reactive pipeline, mount and event loop
//! - [`theme`] - Color themes

pub mod catalog;
pub mod cuisine;
pub mod error;
pub mod filter;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

pub use types::*;

pub use catalog::{Restaurant, catalog};
pub use cuisine::{Cuisine, ParseCuisineError};
pub use error::{Error, Result};
pub use filter::{compute_visible, matches_cuisine, matches_search};

pub use layout::{PageLayout, compute_page_layout, string_width, truncate_text};

pub use renderer::{DiffRenderer, FrameBuffer, InlineRenderer, OutputBuffer, Pen};

pub use pipeline::{
    FrameResult, MountHandle, MountOptions, PageView, create_frame_buffer_derived, create_layout_derived, mount,
    paint_page, render_mode, render_once, run, set_render_mode, set_terminal_size, terminal_height,
    terminal_width, tick, unmount,
};

pub use state::{
    BrowserKeysHandle, Control, InputEvent, KeyState, KeyboardEvent, Modifiers, RestaurantBrowser, UiState,
    route_event, route_keyboard_event, setup_browser_keys,
};

pub use theme::{Palette, Theme, ThemeColor, active_theme, cycle_theme, preset_names, set_theme};
