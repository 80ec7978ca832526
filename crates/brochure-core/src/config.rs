//! Configuration — every page threshold and duration, with JSON overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Scroll offset (px) past which the header gains its shadow
    #[serde(default = "default_header_scroll_threshold")]
    pub header_scroll_threshold: f64,

    /// Scroll offset (px) past which the back-to-top button shows
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: f64,

    /// Look-ahead (px) added to the scroll offset when picking the active section
    #[serde(default = "default_nav_lookahead")]
    pub nav_lookahead: f64,

    /// Viewport width (px) above which the mobile menu force-closes
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,

    /// Quiet period (ms) before a resize burst is acted on
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u32,

    /// Gap (px) pulled in from the viewport bottom before a reveal triggers
    #[serde(default = "default_reveal_bottom_margin_px")]
    pub reveal_bottom_margin_px: u32,

    /// Fraction of an element that must be visible to reveal it
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,

    /// Fraction of the hero-stats container that must be visible to start counters
    #[serde(default = "default_stats_threshold")]
    pub stats_threshold: f64,

    /// Counter animation length (ms)
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: f64,

    /// Delay (ms) before a submitted contact form resets
    #[serde(default = "default_form_reset_delay_ms")]
    pub form_reset_delay_ms: u32,
}

fn default_header_scroll_threshold() -> f64 {
    50.0
}
fn default_back_to_top_threshold() -> f64 {
    600.0
}
fn default_nav_lookahead() -> f64 {
    120.0
}
fn default_mobile_breakpoint() -> f64 {
    768.0
}
fn default_resize_debounce_ms() -> u32 {
    150
}
fn default_reveal_bottom_margin_px() -> u32 {
    80
}
fn default_reveal_threshold() -> f64 {
    0.1
}
fn default_stats_threshold() -> f64 {
    0.5
}
fn default_counter_duration_ms() -> f64 {
    1500.0
}
fn default_form_reset_delay_ms() -> u32 {
    5000
}

impl BehaviorConfig {
    /// Parse overrides from a JSON object; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse site config JSON")
    }

    /// Root margin string for the reveal observer, e.g. `"0px 0px -80px 0px"`.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: default_header_scroll_threshold(),
            back_to_top_threshold: default_back_to_top_threshold(),
            nav_lookahead: default_nav_lookahead(),
            mobile_breakpoint: default_mobile_breakpoint(),
            resize_debounce_ms: default_resize_debounce_ms(),
            reveal_bottom_margin_px: default_reveal_bottom_margin_px(),
            reveal_threshold: default_reveal_threshold(),
            stats_threshold: default_stats_threshold(),
            counter_duration_ms: default_counter_duration_ms(),
            form_reset_delay_ms: default_form_reset_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.header_scroll_threshold, 50.0);
        assert_eq!(config.back_to_top_threshold, 600.0);
        assert_eq!(config.nav_lookahead, 120.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.resize_debounce_ms, 150);
        assert_eq!(config.counter_duration_ms, 1500.0);
        assert_eq!(config.form_reset_delay_ms, 5000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = BehaviorConfig::from_json_str(r#"{"mobile_breakpoint": 1024}"#).unwrap();
        assert_eq!(config.mobile_breakpoint, 1024.0);
        assert_eq!(config.header_scroll_threshold, 50.0);
        assert_eq!(config.reveal_threshold, 0.1);
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let config = BehaviorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BehaviorConfig::default());
    }

    #[test]
    fn test_invalid_json_fails() {
        assert!(BehaviorConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_reveal_root_margin() {
        assert_eq!(
            BehaviorConfig::default().reveal_root_margin(),
            "0px 0px -80px 0px"
        );
    }
}
