//! Mobile menu state machine — Closed ⇄ Open, driven by named events.

/// Everything that can change the menu state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    ToggleClicked,
    OverlayClicked,
    LinkClicked,
    EscapePressed,
    /// Debounced viewport width after a resize burst settles.
    ViewportResized(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    phase: MenuPhase,
    /// Viewport width above which the menu force-closes on resize.
    breakpoint: f64,
}

impl MenuState {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            phase: MenuPhase::Closed,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Body scroll is locked exactly while the menu is open.
    pub fn body_scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Apply an event. Returns true when the visible state changed, so the
    /// caller can skip DOM work for the idempotent close paths.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::ToggleClicked => match self.phase {
                MenuPhase::Closed => MenuPhase::Open,
                MenuPhase::Open => MenuPhase::Closed,
            },
            MenuEvent::OverlayClicked | MenuEvent::LinkClicked | MenuEvent::EscapePressed => {
                MenuPhase::Closed
            }
            MenuEvent::ViewportResized(width) => {
                if width > self.breakpoint {
                    MenuPhase::Closed
                } else {
                    self.phase
                }
            }
        };

        let changed = next != self.phase;
        self.phase = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuState {
        MenuState::new(768.0)
    }

    #[test]
    fn test_toggle_flips() {
        let mut m = menu();
        assert!(!m.is_open());
        assert!(m.apply(MenuEvent::ToggleClicked));
        assert!(m.is_open());
        assert!(m.apply(MenuEvent::ToggleClicked));
        assert!(!m.is_open());
    }

    #[test]
    fn test_every_close_path_closes() {
        for event in [
            MenuEvent::OverlayClicked,
            MenuEvent::LinkClicked,
            MenuEvent::EscapePressed,
        ] {
            let mut m = menu();
            m.apply(MenuEvent::ToggleClicked);
            assert!(m.apply(event));
            assert!(!m.is_open());
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut m = menu();
        assert!(!m.apply(MenuEvent::EscapePressed));
        assert!(!m.apply(MenuEvent::OverlayClicked));
        assert!(!m.is_open());
    }

    #[test]
    fn test_resize_above_breakpoint_closes() {
        let mut m = menu();
        m.apply(MenuEvent::ToggleClicked);
        assert!(m.apply(MenuEvent::ViewportResized(1024.0)));
        assert!(!m.is_open());
    }

    #[test]
    fn test_resize_below_breakpoint_leaves_open() {
        let mut m = menu();
        m.apply(MenuEvent::ToggleClicked);
        assert!(!m.apply(MenuEvent::ViewportResized(500.0)));
        assert!(m.is_open());
    }

    #[test]
    fn test_resize_at_breakpoint_leaves_open() {
        // Strict comparison: 768 wide is still "mobile".
        let mut m = menu();
        m.apply(MenuEvent::ToggleClicked);
        assert!(!m.apply(MenuEvent::ViewportResized(768.0)));
        assert!(m.is_open());
    }

    #[test]
    fn test_scroll_lock_tracks_open_state() {
        let mut m = menu();
        let events = [
            MenuEvent::ToggleClicked,
            MenuEvent::ViewportResized(500.0),
            MenuEvent::EscapePressed,
            MenuEvent::ToggleClicked,
            MenuEvent::ToggleClicked,
            MenuEvent::OverlayClicked,
            MenuEvent::ToggleClicked,
            MenuEvent::ViewportResized(900.0),
        ];
        for event in events {
            m.apply(event);
            assert_eq!(m.body_scroll_locked(), m.is_open());
        }
    }
}
