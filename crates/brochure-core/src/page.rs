//! PageController — all page-lifetime state in one place.

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::counter::StatsTrigger;
use crate::menu::MenuState;
use crate::reveal::RevealTracker;
use crate::scroll::ScrollChrome;

/// Owns every component state machine for the lifetime of the page.
/// Constructed once after the markup is parsed; never torn down.
#[derive(Debug, Clone)]
pub struct PageController {
    pub config: BehaviorConfig,
    pub menu: MenuState,
    pub chrome: ScrollChrome,
    pub reveals: RevealTracker,
    pub stats: StatsTrigger,
}

impl PageController {
    pub fn new(config: BehaviorConfig) -> Self {
        debug!(?config, "page controller initialized");
        let menu = MenuState::new(config.mobile_breakpoint);
        let chrome = ScrollChrome::new(
            config.header_scroll_threshold,
            config.back_to_top_threshold,
        );
        Self {
            menu,
            chrome,
            reveals: RevealTracker::new(),
            stats: StatsTrigger::new(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuEvent;

    #[test]
    fn test_initial_state_is_quiescent() {
        let page = PageController::new(BehaviorConfig::default());
        assert!(!page.menu.is_open());
        assert!(!page.stats.has_fired());
        assert_eq!(page.reveals.animated_count(), 0);
        assert_eq!(page.chrome.last_scroll(), 0.0);
    }

    #[test]
    fn test_components_are_independent() {
        let mut page = PageController::new(BehaviorConfig::default());

        page.menu.apply(MenuEvent::ToggleClicked);
        let chrome = page.chrome.observe(700.0);
        page.reveals.mark_visible("about-card");
        page.stats.arm();
        page.stats.fire();

        assert!(page.menu.is_open());
        assert!(chrome.header_scrolled);
        assert!(chrome.back_to_top_visible);
        assert!(page.reveals.is_animated("about-card"));
        assert!(page.stats.has_fired());

        // Closing the menu disturbs nothing else.
        page.menu.apply(MenuEvent::EscapePressed);
        assert!(!page.menu.body_scroll_locked());
        assert!(page.reveals.is_animated("about-card"));
        assert!(page.stats.has_fired());
    }

    #[test]
    fn test_thresholds_come_from_config() {
        let config = BehaviorConfig::from_json_str(
            r#"{"header_scroll_threshold": 10, "back_to_top_threshold": 20}"#,
        )
        .unwrap();
        let mut page = PageController::new(config);
        let chrome = page.chrome.observe(15.0);
        assert!(chrome.header_scrolled);
        assert!(!chrome.back_to_top_visible);
    }
}
