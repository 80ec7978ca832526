//! Site header — brand, nav links, hamburger toggle, and the menu overlay.

use dioxus::prelude::*;

use crate::components::smooth_anchor;
use crate::content;

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    pub menu_open: bool,
    pub header_scrolled: bool,
    /// Section id currently highlighted in the nav, if any.
    pub active_section: Option<String>,
    pub on_toggle: EventHandler<()>,
    pub on_link_click: EventHandler<()>,
    pub on_overlay_click: EventHandler<()>,
}

pub fn NavBar(props: NavBarProps) -> Element {
    let on_toggle = props.on_toggle;
    let on_link_click = props.on_link_click;
    let on_overlay_click = props.on_overlay_click;

    rsx! {
        header {
            id: "header",
            class: if props.header_scrolled { "site-header scrolled" } else { "site-header" },
            div { class: "nav-inner",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |event| smooth_anchor(&event, "home"),
                    "{content::FIRM_NAME}"
                }

                nav {
                    id: "navLinks",
                    class: if props.menu_open { "nav-links open" } else { "nav-links" },
                    "aria-label": "Primary",
                    for link in content::NAV_LINKS {
                        a {
                            class: if props.active_section.as_deref() == Some(link.target) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            },
                            href: "#{link.target}",
                            onclick: move |event| {
                                smooth_anchor(&event, link.target);
                                on_link_click.call(());
                            },
                            "{link.label}"
                        }
                    }
                }

                button {
                    id: "hamburger",
                    class: if props.menu_open { "hamburger active" } else { "hamburger" },
                    "aria-label": "Toggle navigation",
                    "aria-expanded": if props.menu_open { "true" } else { "false" },
                    onclick: move |_| on_toggle.call(()),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }

        div {
            class: if props.menu_open { "nav-overlay active" } else { "nav-overlay" },
            onclick: move |_| on_overlay_click.call(()),
        }
    }
}
