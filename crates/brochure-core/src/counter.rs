//! Stat counter animation — cubic ease-out with an exact end snap.

/// Cubic ease-out: decelerates toward 1.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Displayed counter value `elapsed_ms` into a `duration_ms` run.
///
/// Below the end this is `floor(eased * target)`; at or past the end it is
/// exactly `target`, never a floating-point undershoot.
pub fn value_at(elapsed_ms: f64, duration_ms: f64, target: u64) -> u64 {
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    if progress >= 1.0 {
        return target;
    }
    (ease_out_cubic(progress) * target as f64).floor() as u64
}

/// Parse a counter's `data-target` attribute. Anything that is not a plain
/// non-negative integer yields `None` and the raw text is shown unanimated.
pub fn parse_target(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Unarmed,
    Armed,
    Fired,
}

/// Hero-stats trigger: Unarmed → Armed → Fired, terminal.
///
/// `fire` answers true exactly once, and only after arming, so the counters
/// cannot re-run even if the container is observed twice.
#[derive(Debug, Clone)]
pub struct StatsTrigger {
    phase: TriggerPhase,
}

impl StatsTrigger {
    pub fn new() -> Self {
        Self {
            phase: TriggerPhase::Unarmed,
        }
    }

    /// The visibility observer is attached.
    pub fn arm(&mut self) {
        if self.phase == TriggerPhase::Unarmed {
            self.phase = TriggerPhase::Armed;
        }
    }

    pub fn fire(&mut self) -> bool {
        if self.phase == TriggerPhase::Armed {
            self.phase = TriggerPhase::Fired;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    pub fn has_fired(&self) -> bool {
        self.phase == TriggerPhase::Fired
    }
}

impl Default for StatsTrigger {
    fn default() -> Self {
        Self::new()
    }
}
