//! Built-in themes.
//!
//! - light (default, red brand on a pale gray page)
//! - dark
//! - terminal (ANSI only, follows the user's terminal scheme)

use super::{Theme, ThemeColor};
use crate::types::Rgba;

const fn rgb(hex: u32) -> ThemeColor {
    ThemeColor::Rgb(Rgba::from_rgb_int(hex))
}

pub fn light() -> Theme {
    Theme {
        name: "light",
        description: "Red brand on a pale gray page",
        primary: rgb(0xef4444),    // red-500
        text: rgb(0x111827),       // gray-900
        text_muted: rgb(0x6b7280), // gray-500
        background: rgb(0xf9fafb), // gray-50
        surface: rgb(0xffffff),
        image: rgb(0xe5e7eb), // gray-200
        border: rgb(0xd1d5db), // gray-300
        border_focus: rgb(0xef4444),
        rating_bg: rgb(0xdcfce7), // green-100
        rating_fg: rgb(0x15803d), // green-700
    }
}

pub fn dark() -> Theme {
    Theme {
        name: "dark",
        description: "Light text on slate",
        primary: rgb(0xf87171),
        text: rgb(0xf3f4f6),
        text_muted: rgb(0x9ca3af),
        background: rgb(0x111827),
        surface: rgb(0x1f2937),
        image: rgb(0x374151),
        border: rgb(0x4b5563),
        border_focus: rgb(0xf87171),
        rating_bg: rgb(0x14532d),
        rating_fg: rgb(0x86efac),
    }
}

/// ANSI colors only.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",
        description: "Uses terminal default colors",
        primary: ThemeColor::Ansi(9), // bright red
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        image: ThemeColor::Ansi(8),
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(9),
        rating_bg: ThemeColor::Ansi(2),
        rating_fg: ThemeColor::Ansi(15),
    }
}

/// Preset names in cycling order.
pub fn preset_names() -> Vec<&'static str> {
    vec!["light", "dark", "terminal"]
}

pub fn get_preset(name: &str) -> Option<Theme> {
    match name.trim().to_ascii_lowercase().as_str() {
        "light" => Some(light()),
        "dark" => Some(dark()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in preset_names() {
            let theme = get_preset(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get_preset("Dark").map(|t| t.name), Some("dark"));
        assert!(get_preset("dracula").is_none());
    }

    #[test]
    fn test_terminal_is_ansi_only() {
        let t = terminal();
        for color in [t.primary, t.text_muted, t.border, t.rating_bg] {
            assert!(matches!(color, ThemeColor::Ansi(_)));
        }
    }
}
