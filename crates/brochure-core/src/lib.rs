//! brochure-core — Pure page-behavior logic, no DOM.
//!
//! This crate contains the complete state machines, thresholds, easing
//! curves, and validation rules for the marketing page. It is completely
//! platform-agnostic — the web frontend drives it from browser events and
//! renders whatever state it reports.

pub mod config;
pub mod counter;
pub mod form;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod scroll;
