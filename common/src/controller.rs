//! Page navigation state machine
//!
//! Owns the two pieces of UI state (compact-menu visibility and the active
//! section) and publishes every change to registered listeners. The
//! rendering layer subscribes once and recomputes its view from the
//! published snapshot, so reactivity stays explicit.

use crate::section::SectionId;
use crate::viewport::ACTIVE_SECTION_THRESHOLD;

/// Snapshot of the page's UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Whether the compact/mobile menu panel is open.
    pub menu_open: bool,
    /// The section currently highlighted in the navigation bar.
    pub active: SectionId,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active: SectionId::Home,
        }
    }
}

/// Capability for bringing a section into view.
pub trait SectionHost {
    /// Scrolls the section into view with smooth animation. Returns `false`
    /// when no element backs `id`.
    fn reveal(&self, id: SectionId) -> bool;
}

/// Controller for the page's UI state.
pub struct PageController {
    state: PageState,
    attached: bool,
    listeners: Vec<Box<dyn FnMut(PageState)>>,
}

impl PageController {
    pub fn new() -> Self {
        Self {
            state: PageState::default(),
            attached: true,
            listeners: Vec::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Registers a listener that receives every state change.
    pub fn on_change(&mut self, listener: impl FnMut(PageState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Navigates to a section: scrolls it into view, marks it active, and
    /// closes the compact menu. If the host has no element for `id` nothing
    /// changes and no error surfaces.
    pub fn navigate(&mut self, id: SectionId, host: &dyn SectionHost) {
        if !host.reveal(id) {
            return;
        }
        self.state.active = id;
        self.state.menu_open = false;
        self.notify();
    }

    /// Flips the compact menu open or closed.
    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        self.notify();
    }

    /// Scroll-driven detection input: marks `id` active once at least
    /// [`ACTIVE_SECTION_THRESHOLD`] of it is visible. Ignored after
    /// [`detach`](Self::detach). Several sections reporting in one batch
    /// resolve in callback order, so the last report wins.
    pub fn section_visible(&mut self, id: SectionId, visible_fraction: f64) {
        if !self.attached || visible_fraction < ACTIVE_SECTION_THRESHOLD {
            return;
        }
        self.state.active = id;
        self.notify();
    }

    /// Unmount hook: stops reacting to visibility reports.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn notify(&mut self) {
        let state = self.state;
        for listener in &mut self.listeners {
            listener(state);
        }
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}
