//! Layout derived: re-runs the page layout whenever the terminal size, the
//! render mode or the number of visible restaurants changes.

use spark_signals::{Derived, derived};

use super::terminal::{render_mode_signal, terminal_height_signal, terminal_width_signal};
use crate::layout::{PageLayout, compute_page_layout};
use crate::state::RestaurantBrowser;
use crate::types::RenderMode;

/// Create the layout derived for `browser`.
///
/// A layout failure is logged and yields an empty page of the terminal's
/// size, so a bad frame never takes the application down.
pub fn create_layout_derived(browser: &RestaurantBrowser) -> Derived<PageLayout> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();
    let mode_signal = render_mode_signal();
    let browser = browser.clone();

    derived(move || {
        let tw = tw_signal.get();
        let th = th_signal.get();
        // Height is only pinned in fullscreen; inline pages grow with content.
        let constrain_height = mode_signal.get() == RenderMode::Fullscreen;
        let card_count = browser.visible().len();

        match compute_page_layout(tw, th, constrain_height, card_count) {
            Ok(layout) => {
                tracing::trace!(
                    width = tw,
                    height = layout.height,
                    cards = card_count,
                    max_scroll = layout.max_scroll,
                    "layout computed"
                );
                layout
            }
            Err(err) => {
                tracing::error!(%err, "page layout failed");
                PageLayout {
                    width: tw,
                    height: if constrain_height { th } else { 1 },
                    ..PageLayout::default()
                }
            }
        }
    })
}
