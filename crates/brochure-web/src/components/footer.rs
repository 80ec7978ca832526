//! Footer — firm details and in-page quick links.

use dioxus::prelude::*;

use crate::components::smooth_anchor;
use crate::content;

pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                div { class: "footer-brand",
                    p { class: "footer-name", "{content::FIRM_NAME}" }
                    p { class: "footer-tagline", "{content::FIRM_TAGLINE}" }
                }
                nav { class: "footer-links", "aria-label": "Footer",
                    for link in content::NAV_LINKS {
                        a {
                            href: "#{link.target}",
                            onclick: move |event| smooth_anchor(&event, link.target),
                            "{link.label}"
                        }
                    }
                }
                div { class: "footer-contact",
                    p { "{content::CONTACT_PHONE}" }
                    p { "{content::CONTACT_EMAIL}" }
                    p { "{content::CONTACT_ADDRESS}" }
                }
            }
            p { class: "footer-legal",
                "Mutual fund investments are subject to market risks. Read all \
                 scheme-related documents carefully."
            }
        }
    }
}
