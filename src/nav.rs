//! Navigation state, kept apart from the DOM so the transitions are plain
//! data. The browser side (scroll lock, focus trap, retrying scroll) lives
//! in `app::navbar`.

pub const DEFAULT_HASH: &str = "#home";

#[derive(Debug, Clone, Copy)]
pub struct SectionLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [SectionLink; 4] = [
    SectionLink {
        href: "#home",
        label: "Home",
    },
    SectionLink {
        href: "#about",
        label: "About",
    },
    SectionLink {
        href: "#projects",
        label: "Projects",
    },
    SectionLink {
        href: "#contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub active_hash: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_hash: DEFAULT_HASH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    /// The URL's fragment (with leading `#`, may be empty) after any
    /// pathname or hash change.
    LocationChanged(String),
}

impl NavState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::ToggleMenu => self.menu_open = !self.menu_open,
            NavAction::CloseMenu => self.menu_open = false,
            NavAction::LocationChanged(hash) => {
                // navigating anywhere dismisses the mobile menu
                self.menu_open = false;
                self.active_hash = if hash.is_empty() {
                    DEFAULT_HASH.to_string()
                } else {
                    hash
                };
            }
        }
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active_hash == href
    }
}

/// Where a navigation link points. Dispatch is explicit rather than
/// sniffing string prefixes at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Internal(String),
    Anchor(String),
    External(String),
}

impl NavTarget {
    pub fn parse(href: &str) -> Self {
        if is_external(href) {
            NavTarget::External(href.to_string())
        } else if let Some(id) = href.strip_prefix('#') {
            NavTarget::Anchor(id.to_string())
        } else {
            NavTarget::Internal(href.to_string())
        }
    }

    /// The href to render. Anchors always route through the home page so
    /// the scroll manager can find their section after navigation.
    pub fn href(&self) -> String {
        match self {
            NavTarget::Internal(path) => path.clone(),
            NavTarget::Anchor(id) => format!("/#{id}"),
            NavTarget::External(url) => url.clone(),
        }
    }
}

fn is_external(href: &str) -> bool {
    let lower = href.get(..8).map(|s| s.to_ascii_lowercase());
    match lower {
        Some(s) => s.starts_with("http://") || s.starts_with("https://"),
        None => false,
    }
}

/// Bounded attempt counter for the scroll-retry loop. The interval that
/// owns one of these clears itself once the budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    remaining: u32,
}

impl RetryBudget {
    pub fn new(attempts: u32) -> Self {
        Self {
            remaining: attempts,
        }
    }

    /// Consume one attempt. Returns `false` once the budget is exhausted.
    pub fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining > 0
    }

    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_menu_both_ways() {
        let mut state = NavState::default();
        assert!(!state.menu_open);
        state.apply(NavAction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = NavState::default();
        state.apply(NavAction::ToggleMenu);
        state.apply(NavAction::CloseMenu);
        assert!(!state.menu_open);
        state.apply(NavAction::CloseMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn location_change_updates_hash_and_closes_menu() {
        let mut state = NavState::default();
        state.apply(NavAction::ToggleMenu);
        state.apply(NavAction::LocationChanged("#contact".to_string()));
        assert!(!state.menu_open);
        assert_eq!(state.active_hash, "#contact");
        assert!(state.is_active("#contact"));
        assert!(!state.is_active("#home"));
    }

    #[test]
    fn missing_fragment_falls_back_to_home() {
        let mut state = NavState::default();
        state.apply(NavAction::LocationChanged("#about".to_string()));
        state.apply(NavAction::LocationChanged(String::new()));
        assert_eq!(state.active_hash, DEFAULT_HASH);
    }

    #[test]
    fn nav_target_dispatch() {
        assert_eq!(
            NavTarget::parse("#projects"),
            NavTarget::Anchor("projects".to_string())
        );
        assert_eq!(
            NavTarget::parse("/admin-login"),
            NavTarget::Internal("/admin-login".to_string())
        );
        assert_eq!(
            NavTarget::parse("https://github.com/example"),
            NavTarget::External("https://github.com/example".to_string())
        );
        // scheme check is case-insensitive, like the browser's
        assert_eq!(
            NavTarget::parse("HTTPS://example.com"),
            NavTarget::External("HTTPS://example.com".to_string())
        );
    }

    #[test]
    fn anchor_href_routes_through_home() {
        assert_eq!(NavTarget::parse("#contact").href(), "/#contact");
        assert_eq!(NavTarget::parse("/projects").href(), "/projects");
        assert_eq!(
            NavTarget::parse("https://example.com").href(),
            "https://example.com"
        );
    }

    #[test]
    fn short_hrefs_are_not_external() {
        assert_eq!(NavTarget::parse("#a"), NavTarget::Anchor("a".to_string()));
        assert_eq!(NavTarget::parse("/"), NavTarget::Internal("/".to_string()));
    }

    #[test]
    fn retry_budget_spends_down_then_stops() {
        let mut budget = RetryBudget::new(3);
        assert!(budget.spend());
        assert!(budget.spend());
        assert!(!budget.spend());
        assert!(budget.exhausted());
        // further spends stay exhausted instead of wrapping
        assert!(!budget.spend());
        assert!(budget.exhausted());
    }

    #[test]
    fn zero_budget_is_exhausted_immediately() {
        let mut budget = RetryBudget::new(0);
        assert!(budget.exhausted());
        assert!(!budget.spend());
    }
}
