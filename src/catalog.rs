//! The static restaurant catalog.
//!
//! Records are fixed at build time and never mutated. Free-text fields
//! (delivery time, price, image URL) are carried as-is and never parsed.

/// One restaurant in the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restaurant {
    /// Unique, stable identifier.
    pub id: u32,
    pub name: &'static str,
    /// Comma-separated cuisine tags, e.g. `"Indian, Chinese"`.
    pub cuisine: &'static str,
    /// Score in 0.0..=5.0.
    pub rating: f32,
    /// Minutes range, e.g. `"30-35"`.
    pub delivery_time: &'static str,
    /// Currency-formatted string, e.g. `"₹600"`.
    pub price_for_two: &'static str,
    /// Image URL. Only displayed, never fetched.
    pub image: &'static str,
    pub location: &'static str,
}

static CATALOG: [Restaurant; 3] = [
    Restaurant {
        id: 1,
        name: "The Spice Garden",
        cuisine: "Indian, Chinese",
        rating: 4.2,
        delivery_time: "30-35",
        price_for_two: "₹600",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=500&q=80",
        location: "Downtown",
    },
    Restaurant {
        id: 2,
        name: "Pizza Paradise",
        cuisine: "Italian, Pizza",
        rating: 4.5,
        delivery_time: "25-30",
        price_for_two: "₹800",
        image: "https://images.unsplash.com/photo-1579684947550-22e945225d9a?w=500&q=80",
        location: "Westside",
    },
    Restaurant {
        id: 3,
        name: "Sushi Express",
        cuisine: "Japanese, Sushi",
        rating: 4.3,
        delivery_time: "35-40",
        price_for_two: "₹1200",
        image: "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?w=500&q=80",
        location: "Eastside",
    },
];

/// The built-in catalog, in display order.
pub fn catalog() -> &'static [Restaurant] {
    &CATALOG
}
