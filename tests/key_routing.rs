use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use restaurant_browser::pipeline::{create_frame_buffer_derived, create_layout_derived};
use restaurant_browser::state::keyboard::reset_keyboard_state;
use restaurant_browser::theme::reset_theme_state;
use restaurant_browser::{
    BrowserKeysHandle, Control, Cuisine, InputEvent, KeyboardEvent, Modifiers, RenderMode, RestaurantBrowser,
    UiState, active_theme, route_event, route_keyboard_event, set_render_mode, set_terminal_size,
    setup_browser_keys,
};

struct App {
    browser: RestaurantBrowser,
    ui: UiState,
    running: Arc<AtomicBool>,
    _keys: BrowserKeysHandle,
}

fn app() -> App {
    reset_keyboard_state();
    reset_theme_state();
    let browser = RestaurantBrowser::new();
    let ui = UiState::new();
    let running = Arc::new(AtomicBool::new(true));
    let keys = setup_browser_keys(&browser, &ui, running.clone());
    App {
        browser,
        ui,
        running,
        _keys: keys,
    }
}

impl App {
    fn press(&self, key: &str) -> bool {
        route_keyboard_event(KeyboardEvent::new(key), &self.ui)
    }

    fn type_text(&self, text: &str) {
        for ch in text.chars() {
            self.press(&ch.to_string());
        }
    }
}

#[test]
fn test_typing_filters_list() {
    let app = app();
    app.type_text("pizza");
    assert_eq!(app.browser.search_term(), "pizza");
    assert_eq!(app.ui.cursor(), 5);
    let names: Vec<_> = app.browser.visible().iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Pizza Paradise"]);

    app.press("Backspace");
    assert_eq!(app.browser.search_term(), "pizz");

    app.press("Escape");
    assert_eq!(app.browser.search_term(), "");
    assert_eq!(app.browser.visible().len(), 3);
}

#[test]
fn test_tab_then_arrows_select_cuisine() {
    let app = app();
    app.press("Tab");
    assert_eq!(app.ui.focused(), Control::Cuisine);

    app.press("ArrowRight");
    assert_eq!(app.browser.selected_cuisine(), Cuisine::Indian);
    assert_eq!(app.browser.visible().len(), 1);

    app.press("End");
    assert_eq!(app.browser.selected_cuisine(), Cuisine::Japanese);

    // Letters do not edit the search while the select has focus.
    app.press("x");
    assert_eq!(app.browser.search_term(), "");

    let shift_tab = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
    route_keyboard_event(shift_tab, &app.ui);
    assert_eq!(app.ui.focused(), Control::Search);
}

#[test]
fn test_ctrl_c_stops() {
    let app = app();
    route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()), &app.ui);
    assert!(!app.running.load(Ordering::SeqCst));
    assert_eq!(app.browser.search_term(), "");
}

#[test]
fn test_f2_cycles_theme() {
    let app = app();
    let before = active_theme().name;
    app.press("F2");
    assert_ne!(active_theme().name, before);
}

#[test]
fn test_resize_event_updates_terminal_size() {
    let app = app();
    route_event(InputEvent::Resize(132, 50), &app.ui);
    assert_eq!(restaurant_browser::terminal_width(), 132);
    assert_eq!(restaurant_browser::terminal_height(), 50);
}

#[test]
fn test_keys_drive_the_painted_frame() {
    let app = app();
    set_render_mode(RenderMode::Fullscreen);
    set_terminal_size(100, 40);
    let frame = create_frame_buffer_derived(create_layout_derived(&app.browser), &app.browser, &app.ui);

    let text = frame.get().buffer.to_text();
    assert!(text.contains("The Spice Garden"));
    assert!(text.contains("Sushi Express"));

    app.type_text("garden");
    let text = frame.get().buffer.to_text();
    assert!(text.contains("garden"));
    assert!(text.contains("The Spice Garden"));
    assert!(!text.contains("Sushi Express"));

    app.press("Escape");
    app.press("Tab");
    app.press("End");
    let text = frame.get().buffer.to_text();
    assert!(text.contains("Japanese"));
    assert!(text.contains("Sushi Express"));
    assert!(!text.contains("Pizza Paradise"));
}

#[test]
fn test_wheel_scrolls_within_overflow() {
    let app = app();
    set_render_mode(RenderMode::Fullscreen);
    set_terminal_size(80, 24);
    let frame = create_frame_buffer_derived(create_layout_derived(&app.browser), &app.browser, &app.ui);
    let max = frame.get().max_scroll;
    assert!(max > 0);
    app.ui.set_max_scroll(max);

    route_event(InputEvent::Wheel(100), &app.ui);
    assert_eq!(app.ui.scroll(), max);
    assert!(frame.get().buffer.to_text().contains("Eastside"));

    route_event(InputEvent::Wheel(-100), &app.ui);
    assert_eq!(app.ui.scroll(), 0);
}
