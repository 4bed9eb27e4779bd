use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animated::Animated;
use crate::config;
use crate::reveal::hooks::use_reveal;
use crate::reveal::motion::{Easing, Motion};
use crate::utils::scroll::use_scroll_top;

const HEADING: usize = 0;
const FORM: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Every field is required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 1rem;
        background: #f9fafb;
    }
    .contact-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .contact-heading h1 {
        font-size: 3.75rem;
        font-weight: 600;
        color: #1e3a8a;
        margin: 0 0 1.25rem;
    }
    .contact-heading h2 {
        font-size: 3.125rem;
        font-weight: 600;
        color: #047857;
        margin: 0 0 1.25rem;
    }
    .contact-card {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        width: 100%;
        max-width: 48rem;
        padding: 1.5rem;
        margin-bottom: 3rem;
        border-radius: 0.75rem;
        background: white;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        box-sizing: border-box;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-form label {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        font-size: 0.875rem;
        color: #4b5563;
    }
    .contact-form input,
    .contact-form textarea {
        padding: 0.5rem 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 8px;
        font: inherit;
    }
    .contact-form button {
        padding: 0.75rem;
        border: none;
        border-radius: 8px;
        background: #059669;
        color: white;
        font-weight: 600;
        cursor: pointer;
    }
    .contact-form button:hover { background: #047857; }
    .contact-thanks {
        color: #059669;
        font-size: 1.25rem;
        text-align: center;
        margin: 0 0 2rem;
    }
    @media (max-width: 768px) {
        .contact-heading h1 { font-size: 2.25rem; }
        .contact-heading h2 { font-size: 1.875rem; }
    }
"#;

fn field_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    match target.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input.value()),
        Err(target) => target
            .dyn_into::<HtmlTextAreaElement>()
            .ok()
            .map(|area| area.value()),
    }
}

fn on_field(form: &UseStateHandle<ContactForm>, field: ContactField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(value) = field_value(&e) {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_top();
    let reveal = use_reveal(2, config::SECTION_REVEAL_THRESHOLD);
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);
    // Held so the pending reset is cancelled if the page unmounts first.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                return;
            }
            log::debug!("contact form submitted");
            form.set(ContactForm::default());
            submitted.set(true);
            let submitted = submitted.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_CONFIRMATION_MS, move || {
                submitted.set(false);
            }));
        })
    };

    html! {
        <>
            <style>{CONTACT_CSS}</style>
            <section class="contact">
                <Animated
                    class="contact-heading"
                    node_ref={reveal.node(HEADING)}
                    state={reveal.state(HEADING)}
                    motion={Motion::rise(50.0, 800).easing(Easing::STANDARD)}
                >
                    <h1>{"Get in Touch"}</h1>
                    <h2>{"About Water Conservation"}</h2>
                </Animated>

                <Animated
                    class="contact-card"
                    node_ref={reveal.node(FORM)}
                    state={reveal.state(FORM)}
                    motion={Motion::rise(50.0, 800).delay(200)}
                >
                    if *submitted {
                        <p class="contact-thanks" role="status">
                            {"Thank you for your message! We'll get back to you soon."}
                        </p>
                    } else {
                        <form class="contact-form" {onsubmit}>
                            <label>
                                {"Name"}
                                <input
                                    name="name"
                                    required=true
                                    value={form.name.clone()}
                                    oninput={on_field(&form, ContactField::Name)}
                                />
                            </label>
                            <label>
                                {"Email"}
                                <input
                                    name="email"
                                    type="email"
                                    required=true
                                    value={form.email.clone()}
                                    oninput={on_field(&form, ContactField::Email)}
                                />
                            </label>
                            <label>
                                {"Message"}
                                <textarea
                                    name="message"
                                    rows="4"
                                    required=true
                                    value={form.message.clone()}
                                    oninput={on_field(&form, ContactField::Message)}
                                />
                            </label>
                            <button type="submit">{"Send Message"}</button>
                        </form>
                    }
                </Animated>
            </section>
        </>
    }
}
