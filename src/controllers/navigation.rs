//! Navigation bar controller.

use super::scroll_lock::{BodyScrollLock, ScrollGuard, ScrollSuppressor};
use crate::models::{NavLink, NavState};
use std::sync::Arc;
use tracing::debug;

/// Scroll offset past which the header switches to its scrolled look.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Key name that closes the open menu.
const ESCAPE_KEY: &str = "Escape";

/// Tracks whether the menu is open and whether the page has scrolled.
///
/// While the menu is open the controller holds a [`ScrollGuard`]; closing the
/// menu or dropping the controller releases it.
pub struct NavController {
    state: NavState,
    scroll_threshold: f64,
    suppressor: Arc<dyn ScrollSuppressor>,
    scroll_guard: Option<ScrollGuard>,
}

impl NavController {
    pub fn new(suppressor: Arc<dyn ScrollSuppressor>, scroll_threshold: f64) -> Self {
        Self {
            state: NavState::default(),
            scroll_threshold,
            suppressor,
            scroll_guard: None,
        }
    }

    /// Current flags.
    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn scrolled(&self) -> bool {
        self.state.scrolled
    }

    pub fn scroll_threshold(&self) -> f64 {
        self.scroll_threshold
    }

    /// Menu button clicked.
    pub fn toggle(&mut self) {
        self.set_open(!self.state.is_open);
    }

    /// Close the menu if it is open.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// A navigation link or the logo was clicked. Returns the route to show.
    pub fn activate_link(&mut self, link: NavLink) -> &'static str {
        debug!(route = link.route(), "Navigation link activated");
        self.close();
        link.route()
    }

    /// The dimmed overlay behind the mobile panel was clicked.
    pub fn click_overlay(&mut self) {
        self.close();
    }

    /// A key was pressed anywhere on the page.
    ///
    /// Returns true when the key closed the menu.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.state.is_open {
            self.close();
            true
        } else {
            false
        }
    }

    /// The page scrolled to `offset_y`.
    pub fn scroll(&mut self, offset_y: f64) {
        let scrolled = offset_y > self.scroll_threshold;
        if scrolled != self.state.scrolled {
            debug!(scrolled, offset_y, "Header scroll state changed");
        }
        self.state.scrolled = scrolled;
    }

    fn set_open(&mut self, open: bool) {
        if open == self.state.is_open {
            return;
        }

        self.state.is_open = open;
        self.scroll_guard = if open {
            Some(ScrollGuard::acquire(Arc::clone(&self.suppressor)))
        } else {
            None
        };

        debug!(is_open = open, "Navigation menu toggled");
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(Arc::new(BodyScrollLock::new()), DEFAULT_SCROLL_THRESHOLD)
    }
}

impl std::fmt::Debug for NavController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("state", &self.state)
            .field("scroll_threshold", &self.scroll_threshold)
            .finish()
    }
}
