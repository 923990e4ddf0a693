//! Presentation state owned by the terminal host.
//!
//! Focus, search cursor and grid scroll. None of it affects which
//! restaurants are visible.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{Signal, signal};

/// A focusable control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Control {
    #[default]
    Search,
    Cuisine,
}

impl Control {
    /// Tab order.
    pub const ALL: [Control; 2] = [Control::Search, Control::Cuisine];

    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::Cuisine,
            Self::Cuisine => Self::Search,
        }
    }

    pub fn previous(self) -> Self {
        // Two controls: previous and next coincide.
        self.next()
    }
}

/// Focus, cursor and scroll signals.
///
/// Cloning shares the underlying signals.
#[derive(Clone)]
pub struct UiState {
    focus: Signal<Control>,
    cursor: Signal<usize>,
    scroll: Signal<u16>,
    // Written by the render effect once the grid is laid out.
    max_scroll: Rc<Cell<u16>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: signal(Control::default()),
            cursor: signal(0),
            scroll: signal(0),
            max_scroll: Rc::new(Cell::new(0)),
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Control {
        self.focus.get()
    }

    pub fn set_focus(&self, control: Control) {
        if self.focus.get() != control {
            tracing::debug!(?control, "focus changed");
            self.focus.set(control);
        }
    }

    pub fn focus_next(&self) {
        self.set_focus(self.focused().next());
    }

    pub fn focus_previous(&self) {
        self.set_focus(self.focused().previous());
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Char index into the search text.
    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    pub fn set_cursor(&self, position: usize) {
        if self.cursor.get() != position {
            self.cursor.set(position);
        }
    }

    // -------------------------------------------------------------------------
    // Scroll
    // -------------------------------------------------------------------------

    /// Rows scrolled in the card grid, clamped to the current overflow.
    pub fn scroll(&self) -> u16 {
        self.scroll.get().min(self.max_scroll.get())
    }

    /// Scroll as last requested, before clamping. The frame derived reads
    /// this and clamps against the layout it paints.
    pub fn requested_scroll(&self) -> u16 {
        self.scroll.get()
    }

    /// Largest useful scroll offset for the current layout.
    pub fn max_scroll(&self) -> u16 {
        self.max_scroll.get()
    }

    /// Record the grid overflow. Called from the render effect, so it never
    /// writes a signal.
    pub fn set_max_scroll(&self, max: u16) {
        self.max_scroll.set(max);
    }

    /// Scroll by `delta` rows, clamped to `0..=max_scroll`.
    /// Returns true if the visible offset changed.
    pub fn scroll_by(&self, delta: i32) -> bool {
        let current = self.scroll();
        let max = i32::from(self.max_scroll.get());
        let next = (i32::from(current) + delta).clamp(0, max) as u16;
        if next == current {
            return false;
        }
        self.scroll.set(next);
        true
    }

    pub fn reset_scroll(&self) {
        if self.scroll.get() != 0 {
            self.scroll.set(0);
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
