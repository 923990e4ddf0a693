//! The visible-list filter.
//!
//! A record is visible when it matches the search text AND the selected
//! cuisine. Search is case-insensitive against name OR cuisine; the cuisine
//! condition is a case-sensitive substring check on the raw cuisine field.
//! Output keeps catalog order.

use crate::catalog::Restaurant;
use crate::cuisine::Cuisine;

/// Case-insensitive substring match on name or cuisine.
///
/// `needle` must already be lowercased.
pub fn matches_search(restaurant: &Restaurant, needle: &str) -> bool {
    restaurant.name.to_lowercase().contains(needle)
        || restaurant.cuisine.to_lowercase().contains(needle)
}

/// `All` matches everything; otherwise the raw cuisine field must contain
/// the option's value.
pub fn matches_cuisine(restaurant: &Restaurant, selected: Cuisine) -> bool {
    selected.is_all() || restaurant.cuisine.contains(selected.value())
}

/// Compute the subset of `catalog` visible for the given state.
pub fn compute_visible<'a>(
    catalog: &'a [Restaurant],
    search_term: &str,
    selected: Cuisine,
) -> Vec<&'a Restaurant> {
    let needle = search_term.to_lowercase();
    catalog
        .iter()
        .filter(|r| matches_search(r, &needle) && matches_cuisine(r, selected))
        .collect()
}
