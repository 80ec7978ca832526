//! Content sections — about, services, why-us, and contact.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::content;

/// Base classes plus `animated` once the element has revealed.
fn reveal_class(base: &str, id: &str, revealed: &HashSet<String>) -> String {
    if revealed.contains(id) {
        format!("{base} animated")
    } else {
        base.to_string()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SectionProps {
    pub revealed: HashSet<String>,
}

pub fn About(props: SectionProps) -> Element {
    rsx! {
        section { id: "about", class: "section section-about",
            div { class: "section-inner",
                h2 { class: "section-title", "About us" }
                div {
                    id: "about-copy",
                    class: reveal_class("about-copy", "about-copy", &props.revealed),
                    "data-animate": "",
                    p {
                        "{content::FIRM_NAME} is an independent financial advisory practice \
                         serving families across Mumbai since 2007. We are not a product \
                         counter — we are the people you call before any money decision, \
                         from a first SIP to a business succession."
                    }
                    p {
                        "Our advisors hold long tenures and longer client relationships. \
                         Plans are reviewed twice a year, in person, against the goals \
                         they were written for."
                    }
                }
                div {
                    id: "about-figures",
                    class: reveal_class("about-figures", "about-figures", &props.revealed),
                    "data-animate": "",
                    p { class: "about-highlight", "{content::FIRM_TAGLINE}" }
                }
            }
        }
    }
}

pub fn Services(props: SectionProps) -> Element {
    rsx! {
        section { id: "services", class: "section section-services",
            div { class: "section-inner",
                h2 { class: "section-title", "What we do" }
                div { class: "card-grid",
                    for service in content::SERVICES {
                        div {
                            id: "{service.id}",
                            class: reveal_class("card service-card", service.id, &props.revealed),
                            "data-animate": "",
                            h3 { class: "card-title", "{service.title}" }
                            p { class: "card-blurb", "{service.blurb}" }
                        }
                    }
                }
            }
        }
    }
}

pub fn WhyUs(props: SectionProps) -> Element {
    rsx! {
        section { id: "why-us", class: "section section-why",
            div { class: "section-inner",
                h2 { class: "section-title", "Why families stay" }
                div { class: "why-grid",
                    for point in content::SELLING_POINTS {
                        div {
                            id: "{point.id}",
                            class: reveal_class("why-item", point.id, &props.revealed),
                            "data-animate": "",
                            h3 { "{point.title}" }
                            p { "{point.blurb}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ContactProps {
    pub revealed: HashSet<String>,
    pub reset_delay_ms: u32,
}

pub fn Contact(props: ContactProps) -> Element {
    rsx! {
        section { id: "contact", class: "section section-contact",
            div { class: "section-inner",
                h2 { class: "section-title", "Start a conversation" }
                div { class: "contact-columns",
                    div {
                        id: "contact-details",
                        class: reveal_class("contact-details", "contact-details", &props.revealed),
                        "data-animate": "",
                        p { "Tell us where you are headed; we will map the money part." }
                        ul { class: "contact-list",
                            li { "Phone: {content::CONTACT_PHONE}" }
                            li { "Email: {content::CONTACT_EMAIL}" }
                            li { "Office: {content::CONTACT_ADDRESS}" }
                        }
                    }
                    ContactForm { reset_delay_ms: props.reset_delay_ms }
                }
            }
        }
    }
}
