//! State Module - Runtime state
//!
//! - **Browser** - Search text and cuisine signals, derived visible list
//! - **Ui** - Focus, search cursor, grid scroll
//! - **TextEdit** - Pure search box editing
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Input** - crossterm event conversion and polling
//! - **Keys** - Browser bindings and the routing chain

pub mod browser;
pub mod input;
pub mod keyboard;
pub mod keys;
pub mod text_edit;
pub mod ui;

pub use browser::RestaurantBrowser;
pub use input::InputEvent;
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use keys::{BrowserKeysHandle, route_event, route_keyboard_event, setup_browser_keys};
pub use ui::{Control, UiState};
