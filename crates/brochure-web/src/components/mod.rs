//! Page components — header/nav, hero, content sections, form, footer.

pub mod back_to_top;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod sections;

use dioxus::prelude::MouseEvent;

use crate::dom;

/// Shared in-page anchor behavior: when the target id resolves, cancel the
/// default jump and smooth-scroll instead; otherwise the click falls through.
pub(crate) fn smooth_anchor(event: &MouseEvent, target: &str) {
    if dom::scroll_to_section(target) {
        event.prevent_default();
    }
}
