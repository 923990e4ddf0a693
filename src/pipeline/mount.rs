//! Mount: terminal setup, the render effect and the event loop.
//!
//! ```ignore
//! let handle = mount(&browser, &ui, MountOptions::default())?;
//! run(&handle)?;  // until Ctrl+C / Ctrl+Q
//! handle.unmount()?;
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::terminal;
use spark_signals::effect;

use super::frame_buffer_derived::{PageView, create_frame_buffer_derived, paint_page};
use super::layout_derived::create_layout_derived;
use super::terminal::{detect_terminal_size, set_render_mode, terminal_width};
use crate::error::Result;
use crate::layout::compute_page_layout;
use crate::renderer::{DiffRenderer, FrameBuffer, InlineRenderer};
use crate::state::{BrowserKeysHandle, RestaurantBrowser, UiState, input, route_event, setup_browser_keys};
use crate::theme::active_theme;
use crate::types::RenderMode;

/// Event poll timeout (~60 fps).
const POLL_INTERVAL: Duration = Duration::from_millis(16);

// =============================================================================
// Options
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct MountOptions {
    pub mode: RenderMode,
}

// =============================================================================
// Renderer
// =============================================================================

enum Renderer {
    Diff(DiffRenderer),
    Inline(InlineRenderer),
}

impl Renderer {
    fn render(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        match self {
            Self::Diff(renderer) => renderer.render(buffer).map(|_| ()),
            Self::Inline(renderer) => renderer.render(buffer),
        }
    }

    /// Give the terminal back: leave the alternate screen, or move below the
    /// inline frame.
    fn restore<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Diff(renderer) => renderer.exit_fullscreen(out),
            Self::Inline(renderer) => renderer.finish(out),
        }
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Dropping it restores the terminal.
pub struct MountHandle {
    mode: RenderMode,
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    keys: Option<BrowserKeysHandle>,
    renderer: Rc<RefCell<Renderer>>,
    ui: UiState,
    restored: bool,
}

impl MountHandle {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request shutdown; the event loop exits on its next tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Stop rendering and restore the terminal.
    pub fn unmount(mut self) -> Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.stop();

        if let Some(keys) = self.keys.take() {
            keys.cleanup();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        // Restore as much as possible before reporting the first failure.
        let mouse = match self.mode {
            RenderMode::Fullscreen => input::disable_mouse(),
            RenderMode::Inline => Ok(()),
        };
        let screen = self.renderer.borrow_mut().restore(&mut io::stdout().lock());
        let raw = terminal::disable_raw_mode();

        tracing::info!(mode = ?self.mode, "unmounted");
        mouse?;
        screen?;
        raw?;
        Ok(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Err(err) = self.teardown() {
            tracing::error!(%err, "terminal restore failed");
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Take over the terminal and start rendering `browser`.
///
/// Sets up, in order: render mode and size signals, raw mode, the alternate
/// screen and mouse capture (fullscreen only), the key handlers, and the one
/// render effect reading the frame derived.
pub fn mount(browser: &RestaurantBrowser, ui: &UiState, options: MountOptions) -> Result<MountHandle> {
    let mode = options.mode;
    set_render_mode(mode);
    detect_terminal_size();

    terminal::enable_raw_mode()?;
    let renderer = match enter_screen(mode, &mut io::stdout().lock(), input::enable_mouse) {
        Ok(renderer) => renderer,
        Err(err) => {
            if let Err(raw_err) = terminal::disable_raw_mode() {
                tracing::error!(%raw_err, "raw mode restore failed");
            }
            tracing::error!(%err, ?mode, "mount failed");
            return Err(err.into());
        }
    };
    let renderer = Rc::new(RefCell::new(renderer));

    let running = Arc::new(AtomicBool::new(true));
    let keys = setup_browser_keys(browser, ui, running.clone());

    let layout_derived = create_layout_derived(browser);
    let frame_derived = create_frame_buffer_derived(layout_derived, browser, ui);

    let stop = {
        let renderer = renderer.clone();
        let running = running.clone();
        let ui = ui.clone();
        effect(move || {
            if !running.load(Ordering::SeqCst) {
                return;
            }
            let frame = frame_derived.get();
            ui.set_max_scroll(frame.max_scroll);
            if let Err(err) = renderer.borrow_mut().render(&frame.buffer) {
                tracing::error!(%err, "render failed");
            }
        })
    };

    tracing::info!(?mode, width = terminal_width(), "mounted");

    Ok(MountHandle {
        mode,
        stop_effect: Some(Box::new(stop)),
        running,
        keys: Some(keys),
        renderer,
        ui: ui.clone(),
        restored: false,
    })
}

/// Prepare the screen for `mode`. A fullscreen setup that fails part way
/// leaves the alternate screen again before returning the error.
fn enter_screen<W: Write>(
    mode: RenderMode,
    out: &mut W,
    enable_mouse: impl FnOnce() -> io::Result<()>,
) -> io::Result<Renderer> {
    match mode {
        RenderMode::Fullscreen => {
            let mut renderer = DiffRenderer::new();
            renderer.enter_fullscreen(out)?;
            if let Err(err) = enable_mouse() {
                renderer.exit_fullscreen(out)?;
                return Err(err);
            }
            Ok(Renderer::Diff(renderer))
        }
        RenderMode::Inline => Ok(Renderer::Inline(InlineRenderer::new())),
    }
}

/// Unmount and restore the terminal.
pub fn unmount(handle: MountHandle) -> Result<()> {
    handle.unmount()
}

// =============================================================================
// Event Loop
// =============================================================================

/// Process at most one input event.
///
/// Returns `Ok(false)` once shutdown was requested.
pub fn tick(handle: &MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }
    if let Some(event) = input::poll_event(POLL_INTERVAL)? {
        route_event(event, &handle.ui);
    }
    Ok(handle.is_running())
}

/// Run the event loop until Ctrl+C / Ctrl+Q or [`MountHandle::stop`].
pub fn run(handle: &MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// One-shot
// =============================================================================

/// Paint the current view once, inline at `width` columns, into `out`.
///
/// No raw mode and no input. The page is as tall as its content.
pub fn render_once<W: Write>(browser: &RestaurantBrowser, ui: &UiState, width: u16, out: &mut W) -> Result<()> {
    let visible = browser.visible();
    let layout = compute_page_layout(width, 0, false, visible.len())?;
    let search_term = browser.search_term();
    let view = PageView {
        search_term: &search_term,
        cursor: ui.cursor(),
        cuisine: browser.selected_cuisine(),
        focused: ui.focused(),
        visible: &visible,
        scroll: 0,
    };
    let buffer = paint_page(&layout, &view, &active_theme());

    let mut renderer = InlineRenderer::new();
    renderer.render_to(&buffer, out)?;
    renderer.finish(out)?;
    tracing::info!(width, rows = buffer.height(), cards = visible.len(), "rendered once");
    Ok(())
}
