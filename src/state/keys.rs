//! Browser key bindings and event routing.
//!
//! | Key                    | Effect                               |
//! |------------------------|--------------------------------------|
//! | Ctrl+C, Ctrl+Q         | stop                                 |
//! | Tab / Shift+Tab        | move focus                           |
//! | F2                     | next theme                           |
//! | PageDown / PageUp      | scroll the grid by one card row      |
//! | (Search) text keys     | edit the search text                 |
//! | (Search) Esc           | clear the search text                |
//! | (Cuisine) Right/Down   | next option                          |
//! | (Cuisine) Left/Up      | previous option                      |
//! | (Cuisine) Home / End   | first / last option                  |
//!
//! Routing order: focused control first, then key-specific handlers, then
//! global handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::browser::RestaurantBrowser;
use super::input::InputEvent;
use super::keyboard::{self, KeyboardEvent};
use super::text_edit::{Edit, apply_edit};
use super::ui::{Control, UiState};
use crate::cuisine::Cuisine;
use crate::layout::CARD_ROW_STRIDE;
use crate::pipeline::terminal;
use crate::theme;

// =============================================================================
// HANDLE
// =============================================================================

/// Cleanup handle for the browser key handlers.
pub struct BrowserKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl BrowserKeysHandle {
    /// Remove every handler this handle registered.
    pub fn cleanup(mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

// =============================================================================
// SETUP
// =============================================================================

/// Register the browser key handlers.
///
/// `running` is set to false on Ctrl+C / Ctrl+Q.
pub fn setup_browser_keys(
    browser: &RestaurantBrowser,
    ui: &UiState,
    running: Arc<AtomicBool>,
) -> BrowserKeysHandle {
    let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

    // Quit
    cleanups.push(Box::new(keyboard::on(move |event| {
        if event.modifiers.ctrl && matches!(event.key.as_str(), "c" | "q") {
            tracing::info!("quit requested");
            running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    })));

    // Tab / Shift+Tab
    let focus_ui = ui.clone();
    cleanups.push(Box::new(keyboard::on(move |event| {
        if event.key != "Tab" {
            return false;
        }
        if event.modifiers.shift {
            focus_ui.focus_previous();
        } else {
            focus_ui.focus_next();
        }
        true
    })));

    cleanups.push(Box::new(keyboard::on_key("F2", || {
        let name = theme::cycle_theme();
        tracing::debug!(theme = name, "theme cycled");
        true
    })));

    let scroll_ui = ui.clone();
    cleanups.push(Box::new(keyboard::on_key("PageDown", move || {
        scroll_ui.scroll_by(i32::from(CARD_ROW_STRIDE));
        true
    })));
    let scroll_ui = ui.clone();
    cleanups.push(Box::new(keyboard::on_key("PageUp", move || {
        scroll_ui.scroll_by(-i32::from(CARD_ROW_STRIDE));
        true
    })));

    let search_browser = browser.clone();
    let search_ui = ui.clone();
    cleanups.push(Box::new(keyboard::on_focused(Control::Search, move |event| {
        handle_search_key(&search_browser, &search_ui, event)
    })));

    let select_browser = browser.clone();
    let select_ui = ui.clone();
    cleanups.push(Box::new(keyboard::on_focused(Control::Cuisine, move |event| {
        handle_cuisine_key(&select_browser, &select_ui, event)
    })));

    BrowserKeysHandle { cleanups }
}

/// Edit the search text. Returns true if the key was an edit.
fn handle_search_key(browser: &RestaurantBrowser, ui: &UiState, event: &KeyboardEvent) -> bool {
    let Some(edit) = Edit::from_key(event) else {
        return false;
    };

    let outcome = apply_edit(&browser.search_term(), ui.cursor(), edit);
    if let Some(text) = outcome.text {
        browser.set_search_term(text);
        ui.reset_scroll();
    }
    ui.set_cursor(outcome.cursor);
    true
}

/// Step through the cuisine options. Returns true if the key selected one.
fn handle_cuisine_key(browser: &RestaurantBrowser, ui: &UiState, event: &KeyboardEvent) -> bool {
    if event.modifiers.is_command() {
        return false;
    }

    let current = browser.selected_cuisine();
    let next = match event.key.as_str() {
        "ArrowRight" | "ArrowDown" => current.next(),
        "ArrowLeft" | "ArrowUp" => current.previous(),
        "Home" => Cuisine::first(),
        "End" => Cuisine::last(),
        _ => return false,
    };

    if next != current {
        browser.set_selected_cuisine(next);
        ui.reset_scroll();
    }
    true
}

// =============================================================================
// ROUTING
// =============================================================================

/// Route a keyboard event through the priority chain.
/// Returns true if any handler consumed it.
pub fn route_keyboard_event(event: KeyboardEvent, ui: &UiState) -> bool {
    if !event.is_press() {
        return false;
    }

    keyboard::dispatch_focused(ui.focused(), &event) || keyboard::dispatch_to_handlers(&event)
}

/// Route any input event.
pub fn route_event(event: InputEvent, ui: &UiState) -> bool {
    match event {
        InputEvent::Key(key) => route_keyboard_event(key, ui),
        InputEvent::Wheel(rows) => ui.scroll_by(rows),
        InputEvent::Resize(width, height) => {
            terminal::set_terminal_size(width, height);
            false
        }
        InputEvent::None => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::{KeyState, Modifiers, reset_keyboard_state};

    fn setup() -> (RestaurantBrowser, UiState, Arc<AtomicBool>, BrowserKeysHandle) {
        reset_keyboard_state();
        theme::reset_theme_state();
        let browser = RestaurantBrowser::new();
        let ui = UiState::new();
        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_browser_keys(&browser, &ui, running.clone());
        (browser, ui, running, handle)
    }

    fn press(key: &str, ui: &UiState) -> bool {
        route_keyboard_event(KeyboardEvent::new(key), ui)
    }

    #[test]
    fn test_typing_filters() {
        let (browser, ui, _, handle) = setup();
        for ch in ["s", "u", "s", "h", "i"] {
            assert!(press(ch, &ui));
        }
        assert_eq!(browser.search_term(), "sushi");
        assert_eq!(ui.cursor(), 5);
        assert_eq!(browser.visible().len(), 1);

        press("Escape", &ui);
        assert_eq!(browser.search_term(), "");
        assert_eq!(browser.visible().len(), 3);
        handle.cleanup();
    }

    #[test]
    fn test_ctrl_q_stops() {
        let (browser, ui, running, handle) = setup();
        route_keyboard_event(KeyboardEvent::with_modifiers("q", Modifiers::ctrl()), &ui);
        assert!(!running.load(Ordering::SeqCst));
        // Not typed into the search box.
        assert_eq!(browser.search_term(), "");
        handle.cleanup();
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let (browser, ui, _, handle) = setup();
        for state in [KeyState::Release, KeyState::Repeat] {
            let event = KeyboardEvent {
                state,
                ..KeyboardEvent::new("a")
            };
            assert!(!route_keyboard_event(event, &ui));
        }
        assert_eq!(browser.search_term(), "");
        handle.cleanup();
    }

    #[test]
    fn test_plain_q_types() {
        let (browser, ui, running, handle) = setup();
        press("q", &ui);
        assert!(running.load(Ordering::SeqCst));
        assert_eq!(browser.search_term(), "q");
        handle.cleanup();
    }

    #[test]
    fn test_tab_moves_focus_and_arrows_select() {
        let (browser, ui, _, handle) = setup();
        press("Tab", &ui);
        assert_eq!(ui.focused(), Control::Cuisine);

        press("ArrowRight", &ui);
        assert_eq!(browser.selected_cuisine(), Cuisine::Indian);
        press("End", &ui);
        assert_eq!(browser.selected_cuisine(), Cuisine::Japanese);
        press("ArrowDown", &ui);
        assert_eq!(browser.selected_cuisine(), Cuisine::All);
        press("ArrowLeft", &ui);
        assert_eq!(browser.selected_cuisine(), Cuisine::Japanese);
        press("Home", &ui);
        assert_eq!(browser.selected_cuisine(), Cuisine::All);

        // Letters do nothing on the select.
        press("x", &ui);
        assert_eq!(browser.search_term(), "");

        route_keyboard_event(KeyboardEvent::with_modifiers("Tab", Modifiers::shift()), &ui);
        assert_eq!(ui.focused(), Control::Search);
        handle.cleanup();
    }

    #[test]
    fn test_f2_cycles_theme() {
        let (_, ui, _, handle) = setup();
        press("F2", &ui);
        assert_eq!(theme::active_theme().name, "dark");
        theme::reset_theme_state();
        handle.cleanup();
    }

    #[test]
    fn test_page_keys_scroll_within_max() {
        let (_, ui, _, handle) = setup();
        ui.set_max_scroll(15);
        press("PageDown", &ui);
        assert_eq!(ui.scroll(), CARD_ROW_STRIDE.min(15));
        press("PageDown", &ui);
        assert_eq!(ui.scroll(), 15);
        press("PageUp", &ui);
        assert_eq!(ui.scroll(), 15 - CARD_ROW_STRIDE.min(15));
        handle.cleanup();
    }

    #[test]
    fn test_editing_resets_scroll() {
        let (_, ui, _, handle) = setup();
        ui.set_max_scroll(20);
        ui.scroll_by(10);
        press("a", &ui);
        assert_eq!(ui.scroll(), 0);
        handle.cleanup();
    }

    #[test]
    fn test_cleanup_unregisters() {
        let (browser, ui, _, handle) = setup();
        handle.cleanup();
        assert_eq!(keyboard::handler_count(), 0);
        assert!(!press("a", &ui));
        assert_eq!(browser.search_term(), "");
    }

    #[test]
    fn test_wheel_scrolls() {
        let (_, ui, _, handle) = setup();
        ui.set_max_scroll(4);
        assert!(route_event(InputEvent::Wheel(3), &ui));
        assert!(route_event(InputEvent::Wheel(3), &ui));
        assert_eq!(ui.scroll(), 4);
        handle.cleanup();
    }
}
