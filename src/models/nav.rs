//! Navigation bar models.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Open/closed menu and scrolled-header flags.
///
/// The two flags are independent; every combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_open: bool,
    pub scrolled: bool,
}

/// A destination reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavLink {
    Home,
    Services,
    TheirStories,
    OurStory,
    Portfolio,
    Contact,
}

impl NavLink {
    /// Links in the desktop slide-in menu. The logo covers Home there.
    pub const DESKTOP: [NavLink; 5] = [
        NavLink::Services,
        NavLink::TheirStories,
        NavLink::OurStory,
        NavLink::Portfolio,
        NavLink::Contact,
    ];

    /// Links in the mobile panel.
    pub const MOBILE: [NavLink; 6] = [
        NavLink::Home,
        NavLink::Services,
        NavLink::TheirStories,
        NavLink::OurStory,
        NavLink::Portfolio,
        NavLink::Contact,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            NavLink::Home => "/",
            NavLink::Services => "/services",
            NavLink::TheirStories => "/about-team",
            NavLink::OurStory => "/about-us",
            NavLink::Portfolio => "/portfolio",
            NavLink::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Services => "Services",
            NavLink::TheirStories => "Their Stories",
            NavLink::OurStory => "Our Story",
            NavLink::Portfolio => "Varnan",
            NavLink::Contact => "Let's Talk",
        }
    }

    /// Rendered as the call-to-action button rather than a plain link.
    pub fn is_call_to_action(&self) -> bool {
        matches!(self, NavLink::Contact)
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NavLink {
    type Err = String;

    /// Parse a route such as `/about-us`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let route = s.trim();
        NavLink::MOBILE
            .into_iter()
            .find(|link| link.route() == route)
            .ok_or_else(|| format!("Unknown route: {}", route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for link in NavLink::MOBILE {
            assert_eq!(link.route().parse::<NavLink>(), Ok(link));
        }
        assert!("/careers".parse::<NavLink>().is_err());
    }

    #[test]
    fn test_desktop_menu_has_no_home() {
        assert!(!NavLink::DESKTOP.contains(&NavLink::Home));
        assert_eq!(NavLink::MOBILE[0], NavLink::Home);
        assert_eq!(&NavLink::MOBILE[1..], &NavLink::DESKTOP[..]);
    }

    #[test]
    fn test_default_state_is_closed_and_unscrolled() {
        let state = NavState::default();
        assert!(!state.is_open);
        assert!(!state.scrolled);
    }
}
