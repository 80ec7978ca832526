//! Contact form — client-side-only validation and a timed success swap.
//!
//! Submission never leaves the page: accepted input swaps to the success
//! panel, then a timer restores the cleared form.

use dioxus::prelude::*;
use gloo::timers::callback::Timeout;
use tracing::{debug, info};

use brochure_core::form::{self, FormPhase};

#[derive(Props, Clone, PartialEq)]
pub struct ContactFormProps {
    pub reset_delay_ms: u32,
}

pub fn ContactForm(props: ContactFormProps) -> Element {
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phase = use_signal(FormPhase::default);
    let mut reset_timer = use_signal(|| Option::<Timeout>::None);

    let reset_delay_ms = props.reset_delay_ms;
    let submit = move |event: FormEvent| {
        event.prevent_default();

        let submission = match form::validate(&name(), &phone(), &email()) {
            Ok(submission) => submission,
            // Rejections are silent by contract; the reason only hits the log.
            Err(reason) => {
                debug!("contact form rejected: {reason}");
                return;
            }
        };

        info!("contact form accepted for {}", submission.name);
        phase.set(FormPhase::Submitted);

        // Replace any still-pending reset so a resubmission cannot be
        // cleared early by a stale timer.
        reset_timer.with_mut(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
            *slot = Some(Timeout::new(reset_delay_ms, move || {
                name.set(String::new());
                phone.set(String::new());
                email.set(String::new());
                phase.set(FormPhase::Editing);
            }));
        });
    };

    rsx! {
        div { class: "form-panel",
            form {
                id: "contactForm",
                class: if phase().form_hidden() { "contact-form hidden" } else { "contact-form" },
                novalidate: true,
                onsubmit: submit,

                div { class: "form-field",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        placeholder: "Your full name",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "phone", "Phone" }
                    input {
                        id: "phone",
                        name: "phone",
                        r#type: "tel",
                        placeholder: "Mobile number",
                        value: "{phone}",
                        oninput: move |event| phone.set(event.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                }

                button { r#type: "submit", class: "btn btn-primary", "Request a callback" }
            }

            div {
                id: "formSuccess",
                class: if phase().success_hidden() { "form-success hidden" } else { "form-success" },
                h3 { "Thank you!" }
                p { "We have your details. An advisor will call you back within one working day." }
            }
        }
    }
}
