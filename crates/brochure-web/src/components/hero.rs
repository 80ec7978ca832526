//! Hero section — headline, calls to action, and the animated stat row.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::components::smooth_anchor;
use crate::content;

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Current display text per stat, updated frame-by-frame while counting.
    pub stat_values: Vec<String>,
    pub revealed: HashSet<String>,
}

pub fn Hero(props: HeroProps) -> Element {
    let stats = content::STATS.iter().zip(props.stat_values.clone());

    rsx! {
        section { id: "home", class: "hero",
            div {
                id: "hero-intro",
                class: if props.revealed.contains("hero-intro") { "hero-content animated" } else { "hero-content" },
                "data-animate": "",
                h1 { class: "hero-title",
                    "Wealth, planned like it matters. Because it does."
                }
                p { class: "hero-subtitle",
                    "{content::FIRM_NAME} builds long-horizon financial plans for families \
                     and business owners — investments, insurance, and retirement under \
                     one steady hand."
                }
                div { class: "hero-cta-group",
                    a {
                        class: "btn btn-primary",
                        href: "#contact",
                        onclick: move |event| smooth_anchor(&event, "contact"),
                        "Talk to an advisor"
                    }
                    a {
                        class: "btn btn-ghost",
                        href: "#services",
                        onclick: move |event| smooth_anchor(&event, "services"),
                        "Explore services"
                    }
                }
            }

            div { class: "hero-stats",
                for (stat, value) in stats {
                    div { class: "stat",
                        span { class: "stat-number", "data-target": "{stat.target}", "{value}" }
                        span { class: "stat-suffix", "{stat.suffix}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}
