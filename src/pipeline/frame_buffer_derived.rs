//! Frame derived: paints the page into a [`FrameBuffer`].
//!
//! [`paint_page`] is the pure part and takes everything it shows as
//! arguments. [`create_frame_buffer_derived`] wires it to the layout
//! derived, the browser and UI signals and the active theme.

use spark_signals::{Derived, derived};

use crate::catalog::Restaurant;
use crate::cuisine::Cuisine;
use crate::layout::PageLayout;
use crate::primitives::{paint_card, paint_cuisine_select, paint_footer, paint_header, paint_search_box};
use crate::renderer::FrameBuffer;
use crate::state::{Control, RestaurantBrowser, UiState};
use crate::theme::{Theme, active_theme};
use crate::types::ClipRect;

// =============================================================================
// Types
// =============================================================================

/// Everything the page shows apart from its geometry and colors.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub search_term: &'a str,
    /// Char index into `search_term`.
    pub cursor: usize,
    pub cuisine: Cuisine,
    pub focused: Control,
    pub visible: &'a [&'static Restaurant],
    /// Requested grid scroll; clamped to the layout's overflow when painting.
    pub scroll: u16,
}

/// Output of the frame derived.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub buffer: FrameBuffer,
    /// Grid overflow of the layout this frame was painted from.
    pub max_scroll: u16,
}

// =============================================================================
// Painting
// =============================================================================

/// Paint one frame.
///
/// Cards are offset by the scroll and clipped to the grid, so a card cut by
/// the grid edge shows only its visible rows.
pub fn paint_page(layout: &PageLayout, view: &PageView<'_>, theme: &Theme) -> FrameBuffer {
    let palette = theme.palette();
    let mut buf = FrameBuffer::with_background(layout.width, layout.height.max(1), palette.background);

    paint_header(&mut buf, layout.header, &palette);
    paint_search_box(
        &mut buf,
        layout.search,
        &palette,
        view.search_term,
        view.cursor,
        view.focused == Control::Search,
    );
    paint_cuisine_select(
        &mut buf,
        layout.cuisine,
        &palette,
        view.cuisine,
        view.focused == Control::Cuisine,
    );

    let scroll = view.scroll.min(layout.max_scroll);
    for (rect, restaurant) in layout.cards.iter().zip(view.visible) {
        // Entirely above the grid once scrolled.
        let Some(y) = rect.y.checked_sub(scroll) else {
            continue;
        };
        if y >= layout.grid.bottom() {
            break;
        }
        let shifted = ClipRect::new(rect.x, y, rect.width, rect.height);
        paint_card(&mut buf, shifted, &layout.grid, &palette, restaurant);
    }

    paint_footer(&mut buf, layout.footer, &palette, theme.name);
    buf
}

// =============================================================================
// Derived
// =============================================================================

/// Create the frame derived on top of `layout_derived`.
pub fn create_frame_buffer_derived(
    layout_derived: Derived<PageLayout>,
    browser: &RestaurantBrowser,
    ui: &UiState,
) -> Derived<FrameResult> {
    let browser = browser.clone();
    let ui = ui.clone();

    derived(move || {
        let layout = layout_derived.get();
        let search_term = browser.search_term();
        let visible = browser.visible();
        let theme = active_theme();

        let view = PageView {
            search_term: &search_term,
            cursor: ui.cursor(),
            cuisine: browser.selected_cuisine(),
            focused: ui.focused(),
            visible: &visible,
            scroll: ui.requested_scroll(),
        };
        let buffer = paint_page(&layout, &view, &theme);
        tracing::trace!(
            width = buffer.width(),
            height = buffer.height(),
            cards = visible.len(),
            "frame painted"
        );

        FrameResult {
            buffer,
            max_scroll: layout.max_scroll,
        }
    })
}
