//! Terminal size and render mode signals.
//!
//! These are the roots of the page layout: a resize or mode change
//! re-runs the layout, then the frame, then the render effect.

use spark_signals::{Signal, signal};

use crate::types::RenderMode;

// =============================================================================
// Terminal Size Signals
// =============================================================================

thread_local! {
    static TERMINAL_WIDTH: Signal<u16> = signal(80);
    static TERMINAL_HEIGHT: Signal<u16> = signal(24);
    static RENDER_MODE: Signal<RenderMode> = signal(RenderMode::Fullscreen);
}

pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.get())
}

pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.get())
}

/// Set the terminal size (resize events, tests, `--once` output width).
pub fn set_terminal_size(width: u16, height: u16) {
    if terminal_width() != width || terminal_height() != height {
        tracing::debug!(width, height, "terminal size changed");
    }
    TERMINAL_WIDTH.with(|w| w.set(width));
    TERMINAL_HEIGHT.with(|h| h.set(height));
}

pub fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(|w| w.clone())
}

pub fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(|h| h.clone())
}

// =============================================================================
// Render Mode
// =============================================================================

pub fn render_mode() -> RenderMode {
    RENDER_MODE.with(|m| m.get())
}

pub fn set_render_mode(mode: RenderMode) {
    RENDER_MODE.with(|m| m.set(mode));
}

pub fn render_mode_signal() -> Signal<RenderMode> {
    RENDER_MODE.with(|m| m.clone())
}

// =============================================================================
// Terminal Detection
// =============================================================================

/// Query the real terminal size. Keeps the current size when stdout is
/// not a terminal.
pub fn detect_terminal_size() {
    match crossterm::terminal::size() {
        Ok((width, height)) => set_terminal_size(width, height),
        Err(err) => tracing::debug!(%err, "terminal size unavailable, keeping default"),
    }
}
