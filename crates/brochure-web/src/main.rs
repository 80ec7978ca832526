//! Brochure WASM frontend — Dioxus app root.
//!
//! Renders the whole page, then wires browser events (scroll, resize,
//! Escape, visibility observers, animation frames) to the core state
//! machines after first mount.

mod components;
mod content;
mod dom;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, info, Level};
use wasm_bindgen_futures::spawn_local;

use brochure_core::counter;
use brochure_core::menu::MenuEvent;
use brochure_core::page::PageController;
use brochure_core::scroll;

use components::back_to_top::BackToTop;
use components::footer::Footer;
use components::hero::Hero;
use components::nav_bar::NavBar;
use components::sections::{About, Contact, Services, WhyUs};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn App() -> Element {
    // The page-lifetime controller: every state machine, one object.
    let controller =
        use_hook(|| Rc::new(RefCell::new(PageController::new(dom::discover_config()))));

    // View-facing state, written only when something actually changed.
    let mut menu_open = use_signal(|| false);
    let mut header_scrolled = use_signal(|| false);
    let mut back_to_top_visible = use_signal(|| false);
    let mut active_section: Signal<Option<String>> = use_signal(|| None);
    let mut revealed: Signal<HashSet<String>> = use_signal(HashSet::new);
    let stat_values: Signal<Vec<String>> = use_signal(|| {
        content::STATS
            .iter()
            .map(|stat| match counter::parse_target(stat.target) {
                Some(_) => "0".to_string(),
                None => stat.target.to_string(),
            })
            .collect()
    });

    // Single funnel for menu events, keeping the scroll lock in step.
    let apply_menu = {
        let controller = controller.clone();
        move |event: MenuEvent| {
            let mut menu_open = menu_open;
            let (changed, open) = {
                let mut page = controller.borrow_mut();
                let changed = page.menu.apply(event);
                (changed, page.menu.is_open())
            };
            if changed {
                menu_open.set(open);
                dom::set_body_scroll_lock(open);
            }
        }
    };

    // Wire browser events once, after the markup exists.
    use_effect({
        let controller = controller.clone();
        let apply_menu = apply_menu.clone();
        move || {
            let config = controller.borrow().config.clone();

            // Scroll chrome + active nav, one passive listener.
            {
                let controller = controller.clone();
                let lookahead = config.nav_lookahead;
                dom::on_scroll(move |y| {
                    let state = controller.borrow_mut().chrome.observe(y);
                    if state.header_scrolled != *header_scrolled.peek() {
                        header_scrolled.set(state.header_scrolled);
                    }
                    if state.back_to_top_visible != *back_to_top_visible.peek() {
                        back_to_top_visible.set(state.back_to_top_visible);
                    }

                    let spans = dom::section_spans();
                    if let Some(id) = scroll::active_section(y, lookahead, &spans) {
                        if active_section.peek().as_deref() != Some(id) {
                            active_section.set(Some(id.to_string()));
                        }
                    }
                });
            }

            // Debounced resize may force-close the menu.
            {
                let apply_menu = apply_menu.clone();
                dom::on_resize_debounced(config.resize_debounce_ms, move |width| {
                    apply_menu(MenuEvent::ViewportResized(width))
                });
            }

            // Escape closes the menu from anywhere.
            {
                let apply_menu = apply_menu.clone();
                dom::on_escape(move || apply_menu(MenuEvent::EscapePressed));
            }

            // One-shot reveal animations.
            {
                let controller = controller.clone();
                dom::observe_reveals(
                    &config.reveal_root_margin(),
                    config.reveal_threshold,
                    move |id| {
                        let first = controller.borrow_mut().reveals.mark_visible(&id);
                        if first {
                            revealed.with_mut(|set| {
                                set.insert(id);
                            });
                        }
                        first
                    },
                );
            }

            // Hero stats: arm only if the container exists, fire at most once.
            {
                let controller = controller.clone();
                let duration_ms = config.counter_duration_ms;
                let fire_controller = controller.clone();
                let attached =
                    dom::observe_once(".hero-stats", config.stats_threshold, move || {
                        if fire_controller.borrow_mut().stats.fire() {
                            start_counters(duration_ms, stat_values);
                        }
                    });
                if attached {
                    controller.borrow_mut().stats.arm();
                }
            }

            info!("page behaviors wired");
        }
    });

    let reset_delay_ms = controller.borrow().config.form_reset_delay_ms;

    rsx! {
        document::Title { "{content::FIRM_NAME} — {content::FIRM_TAGLINE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NavBar {
            menu_open: menu_open(),
            header_scrolled: header_scrolled(),
            active_section: active_section(),
            on_toggle: {
                let apply_menu = apply_menu.clone();
                move |_| apply_menu(MenuEvent::ToggleClicked)
            },
            on_link_click: {
                let apply_menu = apply_menu.clone();
                move |_| apply_menu(MenuEvent::LinkClicked)
            },
            on_overlay_click: {
                let apply_menu = apply_menu.clone();
                move |_| apply_menu(MenuEvent::OverlayClicked)
            },
        }

        main {
            Hero { stat_values: stat_values(), revealed: revealed() }
            About { revealed: revealed() }
            Services { revealed: revealed() }
            WhyUs { revealed: revealed() }
            Contact { revealed: revealed(), reset_delay_ms }
        }

        Footer {}
        BackToTop { visible: back_to_top_visible() }
    }
}

/// Animate every numeric stat from 0 to its target, concurrently. Each
/// counter yields between frames and snaps exactly to its target at the end.
fn start_counters(duration_ms: f64, stat_values: Signal<Vec<String>>) {
    for (index, stat) in content::STATS.iter().enumerate() {
        let Some(target) = counter::parse_target(stat.target) else {
            debug!("stat target {:?} is not numeric, shown as-is", stat.target);
            continue;
        };
        spawn_local(async move {
            let mut stat_values = stat_values;
            let start = dom::now();
            loop {
                let frame_time = dom::next_frame().await;
                let elapsed = frame_time - start;
                let value = counter::value_at(elapsed, duration_ms, target);
                stat_values.with_mut(|values| values[index] = value.to_string());
                if elapsed >= duration_ms {
                    break;
                }
            }
        });
    }
}
