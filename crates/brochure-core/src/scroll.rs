//! Scroll-reactive chrome — header shadow, back-to-top, active nav section.

/// Measured vertical span of one `section[id]`, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Visual chrome derived from a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollChrome {
    header_threshold: f64,
    back_to_top_threshold: f64,
    /// Recorded on every tick; nothing reads it back yet.
    last_scroll: f64,
}

impl ScrollChrome {
    pub fn new(header_threshold: f64, back_to_top_threshold: f64) -> Self {
        Self {
            header_threshold,
            back_to_top_threshold,
            last_scroll: 0.0,
        }
    }

    /// Record a scroll offset and compute the chrome for it.
    pub fn observe(&mut self, y: f64) -> ChromeState {
        self.last_scroll = y;
        ChromeState {
            header_scrolled: y > self.header_threshold,
            back_to_top_visible: y > self.back_to_top_threshold,
        }
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}

/// Which section the nav should highlight for a scroll offset.
///
/// The probe point is `y + lookahead`; a section matches while the probe sits
/// inside `[top, top + height)`. With overlapping spans the last match in
/// document order wins. `None` means no section matched — callers leave the
/// current highlight alone.
pub fn active_section<'a>(y: f64, lookahead: f64, sections: &'a [SectionSpan]) -> Option<&'a str> {
    let probe = y + lookahead;
    let mut hit = None;
    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            hit = Some(section.id.as_str());
        }
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome() -> ScrollChrome {
        ScrollChrome::new(50.0, 600.0)
    }

    fn page_sections() -> Vec<SectionSpan> {
        // Contiguous, non-overlapping, covering 0..2400.
        vec![
            SectionSpan {
                id: "home".into(),
                top: 0.0,
                height: 800.0,
            },
            SectionSpan {
                id: "about".into(),
                top: 800.0,
                height: 600.0,
            },
            SectionSpan {
                id: "services".into(),
                top: 1400.0,
                height: 1000.0,
            },
        ]
    }

    #[test]
    fn test_header_scrolled_iff_past_threshold() {
        let mut c = chrome();
        assert!(!c.observe(0.0).header_scrolled);
        assert!(!c.observe(50.0).header_scrolled);
        assert!(c.observe(50.1).header_scrolled);
        assert!(!c.observe(49.9).header_scrolled);
    }

    #[test]
    fn test_back_to_top_iff_past_threshold() {
        let mut c = chrome();
        assert!(!c.observe(600.0).back_to_top_visible);
        assert!(c.observe(601.0).back_to_top_visible);
        assert!(!c.observe(300.0).back_to_top_visible);
    }

    #[test]
    fn test_last_scroll_recorded() {
        let mut c = chrome();
        c.observe(123.0);
        assert_eq!(c.last_scroll(), 123.0);
        c.observe(7.0);
        assert_eq!(c.last_scroll(), 7.0);
    }

    #[test]
    fn test_exactly_one_active_over_covered_range() {
        let sections = page_sections();
        for y in (0..2200).step_by(37) {
            let hits: Vec<_> = sections
                .iter()
                .filter(|s| {
                    let probe = y as f64 + 120.0;
                    probe >= s.top && probe < s.top + s.height
                })
                .collect();
            assert_eq!(hits.len(), 1, "y = {y}");
            assert_eq!(
                active_section(y as f64, 120.0, &sections),
                Some(hits[0].id.as_str())
            );
        }
    }

    #[test]
    fn test_boundary_handoff() {
        let sections = page_sections();
        // Probe 799.9 is still inside home; probe 800 belongs to about.
        assert_eq!(active_section(679.9, 120.0, &sections), Some("home"));
        assert_eq!(active_section(680.0, 120.0, &sections), Some("about"));
    }

    #[test]
    fn test_no_match_past_the_end() {
        let sections = page_sections();
        assert_eq!(active_section(2400.0, 120.0, &sections), None);
    }

    #[test]
    fn test_overlap_last_match_wins() {
        let sections = vec![
            SectionSpan {
                id: "a".into(),
                top: 0.0,
                height: 500.0,
            },
            SectionSpan {
                id: "b".into(),
                top: 300.0,
                height: 500.0,
            },
        ];
        assert_eq!(active_section(280.0, 120.0, &sections), Some("b"));
    }
}
