use restaurant_browser::{
    Cuisine, DiffRenderer, PageView, RestaurantBrowser, UiState, compute_page_layout, paint_page, render_once,
};
use restaurant_browser::{Control, theme};

#[test]
fn test_render_once_prints_filtered_page() {
    let browser = RestaurantBrowser::new();
    browser.set_search_term("sushi");
    let mut out = Vec::new();
    render_once(&browser, &UiState::new(), 90, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Zomato Clone"));
    assert!(out.contains("Sushi Express"));
    assert!(!out.contains("The Spice Garden"));
    assert!(out.ends_with("\r\n"));
}

#[test]
fn test_diff_renderer_only_repaints_changes() {
    let browser = RestaurantBrowser::new();
    let visible = browser.visible();
    let layout = compute_page_layout(80, 24, true, visible.len()).unwrap();
    let view = PageView {
        search_term: "",
        cursor: 0,
        cuisine: Cuisine::All,
        focused: Control::Search,
        visible: &visible,
        scroll: 0,
    };
    let light = theme::light();
    let first = paint_page(&layout, &view, &light);

    let mut renderer = DiffRenderer::new();
    let mut out = Vec::new();
    let painted = renderer.render_to(&first, &mut out).unwrap();
    assert_eq!(painted, 80 * 24);

    out.clear();
    assert_eq!(renderer.render_to(&first, &mut out).unwrap(), 0);

    let focused = PageView {
        focused: Control::Cuisine,
        ..view
    };
    let second = paint_page(&layout, &focused, &light);
    let changed = renderer.render_to(&second, &mut out).unwrap();
    assert!(changed > 0);
    assert!(changed < 80 * 3 * 2);
}

#[test]
fn test_every_theme_paints_page() {
    let browser = RestaurantBrowser::new();
    let visible = browser.visible();
    let layout = compute_page_layout(120, 30, true, visible.len()).unwrap();
    let view = PageView {
        search_term: "",
        cursor: 0,
        cuisine: Cuisine::All,
        focused: Control::Search,
        visible: &visible,
        scroll: 0,
    };
    for name in theme::preset_names() {
        let preset = theme::get_preset(name).unwrap();
        let text = paint_page(&layout, &view, &preset).to_text();
        assert!(text.contains("Pizza Paradise"), "theme {name}");
        assert!(text.contains(name), "theme {name}");
    }
}
