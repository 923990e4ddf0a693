//! The restaurant browser component state.
//!
//! Two signals (search text, selected cuisine) and one derived: the visible
//! list. The derived recomputes synchronously on read after either signal
//! changes, so no explicit refresh exists.

use std::rc::Rc;

use spark_signals::{Signal, derived, signal};

use crate::catalog::{Restaurant, catalog};
use crate::cuisine::Cuisine;
use crate::filter::compute_visible;

/// Browser state over a static catalog.
///
/// Cloning shares the underlying signals.
#[derive(Clone)]
pub struct RestaurantBrowser {
    catalog: &'static [Restaurant],
    search_term: Signal<String>,
    selected_cuisine: Signal<Cuisine>,
    visible: Rc<dyn Fn() -> Vec<&'static Restaurant>>,
}

impl RestaurantBrowser {
    /// Browser over the built-in catalog with empty search and `All`.
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    pub fn with_catalog(catalog: &'static [Restaurant]) -> Self {
        Self::with_state(catalog, String::new(), Cuisine::All)
    }

    /// Browser with explicit initial values.
    pub fn with_state(
        catalog: &'static [Restaurant],
        search_term: impl Into<String>,
        selected_cuisine: Cuisine,
    ) -> Self {
        let search_term = signal(search_term.into());
        let selected_cuisine = signal(selected_cuisine);

        let visible = {
            let search_term = search_term.clone();
            let selected_cuisine = selected_cuisine.clone();
            let list = derived(move || {
                let term = search_term.get();
                let cuisine = selected_cuisine.get();
                let visible = compute_visible(catalog, &term, cuisine);
                tracing::trace!(term = %term, %cuisine, count = visible.len(), "visible list");
                visible
            });
            Rc::new(move || list.get())
        };

        Self {
            catalog,
            search_term,
            selected_cuisine,
            visible,
        }
    }

    /// Replace the search text. No trimming, validation or length limit.
    pub fn set_search_term(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(search_term = %text, "search term changed");
        self.search_term.set(text);
    }

    pub fn set_selected_cuisine(&self, value: Cuisine) {
        tracing::debug!(cuisine = %value, "cuisine changed");
        self.selected_cuisine.set(value);
    }

    pub fn search_term(&self) -> String {
        self.search_term.get()
    }

    pub fn selected_cuisine(&self) -> Cuisine {
        self.selected_cuisine.get()
    }

    /// Records matching the current state, in catalog order.
    pub fn visible(&self) -> Vec<&'static Restaurant> {
        (self.visible)()
    }

    pub fn catalog(&self) -> &'static [Restaurant] {
        self.catalog
    }
}

impl Default for RestaurantBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_ids(browser: &RestaurantBrowser) -> Vec<u32> {
        browser.visible().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let browser = RestaurantBrowser::new();
        assert_eq!(browser.search_term(), "");
        assert_eq!(browser.selected_cuisine(), Cuisine::All);
        assert_eq!(visible_ids(&browser), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_updates_visible() {
        let browser = RestaurantBrowser::new();
        browser.set_search_term("sushi");
        assert_eq!(visible_ids(&browser), vec![3]);

        browser.set_search_term("");
        assert_eq!(visible_ids(&browser), vec![1, 2, 3]);
    }

    #[test]
    fn test_cuisine_updates_visible() {
        let browser = RestaurantBrowser::new();
        browser.set_selected_cuisine(Cuisine::Italian);
        assert_eq!(visible_ids(&browser), vec![2]);

        browser.set_search_term("spice");
        assert!(browser.visible().is_empty());

        browser.set_selected_cuisine(Cuisine::All);
        assert_eq!(visible_ids(&browser), vec![1]);
    }

    #[test]
    fn test_search_stored_verbatim() {
        let browser = RestaurantBrowser::new();
        browser.set_search_term("  Pizza  ");
        assert_eq!(browser.search_term(), "  Pizza  ");
    }

    #[test]
    fn test_with_state() {
        let browser = RestaurantBrowser::with_state(catalog(), "garden", Cuisine::Indian);
        assert_eq!(visible_ids(&browser), vec![1]);
    }

    #[test]
    fn test_empty_catalog() {
        static EMPTY: [Restaurant; 0] = [];
        let browser = RestaurantBrowser::with_catalog(&EMPTY);
        assert!(browser.visible().is_empty());
    }
}
