//! Theme system.
//!
//! Semantic color slots resolved through [`ThemeColor`], three presets and
//! one active-theme signal. Anything painted from the active theme repaints
//! when the theme changes.
//!
//! # Color Types
//!
//! - `ThemeColor::Default` - Uses terminal's default color
//! - `ThemeColor::Ansi(n)` - ANSI palette index (0-255)
//! - `ThemeColor::Rgb(rgba)` - Explicit RGB color

use spark_signals::{Signal, signal};

use crate::error::{Error, Result};
use crate::types::Rgba;

pub mod presets;

pub use presets::{dark, get_preset, light, preset_names, terminal};

// =============================================================================
// ThemeColor
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// Use terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    Rgb(Rgba),
}

impl ThemeColor {
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Every color the page paints with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub description: &'static str,

    /// Brand color: title, focused outlines, cursor.
    pub primary: ThemeColor,
    pub text: ThemeColor,
    /// Secondary text: cuisine tags, delivery details, hints.
    pub text_muted: ThemeColor,
    /// Page background.
    pub background: ThemeColor,
    /// Card and control background.
    pub surface: ThemeColor,
    /// Image placeholder band.
    pub image: ThemeColor,
    pub border: ThemeColor,
    pub border_focus: ThemeColor,
    pub rating_bg: ThemeColor,
    pub rating_fg: ThemeColor,
}

/// A theme with every slot resolved to a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba,
    pub text: Rgba,
    pub text_muted: Rgba,
    pub background: Rgba,
    pub surface: Rgba,
    pub image: Rgba,
    pub border: Rgba,
    pub border_focus: Rgba,
    pub rating_bg: Rgba,
    pub rating_fg: Rgba,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.primary.resolve(),
            text: self.text.resolve(),
            text_muted: self.text_muted.resolve(),
            background: self.background.resolve(),
            surface: self.surface.resolve(),
            image: self.image.resolve(),
            border: self.border.resolve(),
            border_focus: self.border_focus.resolve(),
            rating_bg: self.rating_bg.resolve(),
            rating_fg: self.rating_fg.resolve(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        light()
    }
}

// =============================================================================
// Active theme
// =============================================================================

thread_local! {
    static ACTIVE_THEME: Signal<Theme> = signal(Theme::default());
}

/// The active theme. Reading inside a derived tracks it.
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|s| s.get())
}

/// Replace the active theme.
pub fn set_active_theme(theme: Theme) {
    tracing::debug!(theme = theme.name, "theme changed");
    ACTIVE_THEME.with(|s| s.set(theme));
}

/// Activate a preset by name.
pub fn set_theme(name: &str) -> Result<()> {
    let theme = get_preset(name).ok_or_else(|| Error::UnknownTheme(name.to_string()))?;
    set_active_theme(theme);
    Ok(())
}

/// Activate the preset after the current one, wrapping around.
/// Returns the new theme's name.
pub fn cycle_theme() -> &'static str {
    let names = preset_names();
    let current = active_theme().name;
    let index = names.iter().position(|n| *n == current).unwrap_or(0);
    let next = names[(index + 1) % names.len()];
    // Every listed name is a preset.
    if let Some(theme) = get_preset(next) {
        set_active_theme(theme);
    }
    next
}

/// Reset to the default theme (for testing).
pub fn reset_theme_state() {
    ACTIVE_THEME.with(|s| s.set(Theme::default()));
}
