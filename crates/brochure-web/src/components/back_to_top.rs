//! Back-to-top button — appears past the visibility threshold.

use dioxus::prelude::*;

use crate::dom;

#[derive(Props, Clone, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

pub fn BackToTop(props: BackToTopProps) -> Element {
    rsx! {
        button {
            id: "backToTop",
            class: if props.visible { "back-to-top visible" } else { "back-to-top" },
            "aria-label": "Back to top",
            onclick: move |_| dom::scroll_to_top(),
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m18 15-6-6-6 6" }
            }
        }
    }
}
