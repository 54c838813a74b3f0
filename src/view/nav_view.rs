//! Navigation bar render model.

use crate::models::{NavLink, NavState};
use serde::Serialize;
use std::fmt;

/// Seconds between the entrance animations of consecutive links.
pub const LINK_STAGGER_SECS: f32 = 0.1;

/// Which image the single menu button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleIcon {
    Open,
    Close,
}

/// A link in one of the menus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLinkView {
    pub link: NavLink,
    pub label: &'static str,
    pub route: &'static str,
    /// Entrance animation delay in seconds.
    pub delay_secs: f32,
    pub call_to_action: bool,
}

/// Everything the navigation bar draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavView {
    pub header_scrolled: bool,
    pub toggle: ToggleIcon,
    pub desktop_menu_open: bool,
    pub mobile_panel_open: bool,
    pub overlay_visible: bool,
    pub desktop_links: Vec<NavLinkView>,
    pub mobile_links: Vec<NavLinkView>,
}

fn link_views(links: &[NavLink]) -> Vec<NavLinkView> {
    links
        .iter()
        .enumerate()
        .map(|(position, link)| NavLinkView {
            link: *link,
            label: link.label(),
            route: link.route(),
            delay_secs: position as f32 * LINK_STAGGER_SECS,
            call_to_action: link.is_call_to_action(),
        })
        .collect()
}

impl NavView {
    pub fn derive(state: NavState) -> Self {
        Self {
            header_scrolled: state.scrolled,
            toggle: if state.is_open {
                ToggleIcon::Close
            } else {
                ToggleIcon::Open
            },
            desktop_menu_open: state.is_open,
            mobile_panel_open: state.is_open,
            overlay_visible: state.is_open,
            desktop_links: link_views(&NavLink::DESKTOP),
            mobile_links: link_views(&NavLink::MOBILE),
        }
    }
}

impl fmt::Display for NavView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.toggle {
            ToggleIcon::Open => "[=]",
            ToggleIcon::Close => "[x]",
        };
        let header = if self.header_scrolled { "scrolled" } else { "top" };
        writeln!(f, "VARNAN {} ({})", icon, header)?;

        if self.mobile_panel_open {
            for link in &self.mobile_links {
                writeln!(f, "  {} -> {}", link.label, link.route)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_view() {
        let view = NavView::derive(NavState::default());
        assert_eq!(view.toggle, ToggleIcon::Open);
        assert!(!view.overlay_visible);
        assert!(!view.desktop_menu_open);
        assert!(!view.to_string().contains("->"));
    }

    #[test]
    fn test_open_view_lists_links() {
        let view = NavView::derive(NavState {
            is_open: true,
            scrolled: true,
        });
        assert_eq!(view.toggle, ToggleIcon::Close);
        assert!(view.header_scrolled);
        assert!(view.mobile_panel_open);
        assert!(view.to_string().contains("Let's Talk -> /contact"));
    }

    #[test]
    fn test_link_delays_stagger() {
        let view = NavView::derive(NavState::default());
        let delays: Vec<f32> = view.desktop_links.iter().map(|l| l.delay_secs).collect();
        assert_eq!(delays.len(), 5);
        assert_eq!(delays[0], 0.0);
        assert!((delays[4] - 0.4).abs() < 1e-6);

        let last = view.mobile_links.last().unwrap();
        assert_eq!(last.link, NavLink::Contact);
        assert!(last.call_to_action);
        assert!((last.delay_secs - 0.5).abs() < 1e-6);
    }
}
