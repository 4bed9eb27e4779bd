use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::config;
use crate::error::MountError;
use crate::reveal::hooks::use_mount_reveal;
use crate::reveal::motion::{Motion, Pose, Transition};
use crate::utils::mount::ModalHost;
use crate::utils::usage::{UsageField, UsageLog};

const TRACKER_CSS: &str = r#"
    .tracker-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 50;
    }
    .tracker-dialog {
        background: white;
        border-radius: 1rem;
        padding: 1.5rem;
        width: 100%;
        max-width: 28rem;
        margin: 0 1rem;
        color: #1f2937;
    }
    .tracker-dialog h2 {
        color: #1e3a8a;
        font-size: 1.5rem;
        font-weight: bold;
        margin: 0 0 1rem;
    }
    .tracker-intro {
        color: #4b5563;
        margin-bottom: 1.5rem;
    }
    .tracker-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .tracker-field {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        font-size: 0.875rem;
        color: #4b5563;
    }
    .tracker-field input {
        border: 1px solid #d1d5db;
        border-radius: 8px;
        padding: 0.5rem 0.75rem;
        font-size: 1rem;
    }
    .tracker-total {
        color: #1e3a8a;
        font-weight: 500;
    }
    .verdict-high { color: #dc2626; }
    .verdict-good { color: #059669; }
    .tracker-actions {
        display: flex;
        gap: 1rem;
    }
    .tracker-actions button {
        padding: 0.5rem 1.25rem;
        border-radius: 6px;
        font-weight: 500;
        cursor: pointer;
    }
    .tracker-reset {
        background: #059669;
        color: white;
        border: none;
    }
    .tracker-reset:hover { background: #047857; }
    .tracker-close {
        background: white;
        color: #059669;
        border: 1px solid #059669;
    }
    .tracker-close:hover { background: #f0f0f0; }
    .tracker-error {
        position: fixed;
        bottom: 1rem;
        right: 1rem;
        background: #fee2e2;
        color: #991b1b;
        padding: 0.75rem 1rem;
        border-radius: 8px;
        z-index: 50;
    }
    @media (max-width: 640px) {
        .tracker-actions {
            flex-direction: column;
        }
    }
"#;

const BACKDROP_MOTION: Motion = Motion::fade(300);
const DIALOG_MOTION: Motion = Motion::new(
    Pose::faded().offset_y(50.0).scaled(0.7),
    Transition::new(300),
);

#[derive(Properties, PartialEq)]
pub struct TrackerProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub host: Result<ModalHost, MountError>,
}

/// Water usage tracker overlay, portalled into the modal host.
#[function_component(Tracker)]
pub fn tracker(props: &TrackerProps) -> Html {
    // Close on Escape, but only listen while open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    listen_for_escape(on_close)
                } else {
                    None
                };
                move || {
                    if let Some((window, callback)) = listener {
                        if let Err(err) = window
                            .remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("failed to remove Escape listener: {:?}", err);
                        }
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    match &props.host {
        Ok(host) => yew::create_portal(
            html! {
                <>
                    <style>{TRACKER_CSS}</style>
                    <TrackerDialog on_close={props.on_close.clone()} />
                </>
            },
            host.element(),
        ),
        Err(err) => html! {
            <>
                <style>{TRACKER_CSS}</style>
                <div class="tracker-error" role="alert">
                    {format!("Usage tracker unavailable: {}", err)}
                </div>
            </>
        },
    }
}

fn listen_for_escape(on_close: Callback<()>) -> Option<(Window, Closure<dyn Fn(KeyboardEvent)>)> {
    let window = web_sys::window()?;
    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.emit(());
        }
    });
    match window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref()) {
        Ok(()) => Some((window, callback)),
        Err(err) => {
            log::warn!("failed to listen for Escape: {:?}", err);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
struct TrackerDialogProps {
    on_close: Callback<()>,
}

#[function_component(TrackerDialog)]
fn tracker_dialog(props: &TrackerDialogProps) -> Html {
    let entrance = use_mount_reveal();
    let usage = use_state(UsageLog::default);

    let total = usage.total();
    let verdict = total.verdict(config::USAGE_WARNING_LITERS);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let reset = {
        let usage = usage.clone();
        Callback::from(move |_: MouseEvent| usage.set(UsageLog::default()))
    };
    let submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let fields = UsageField::ALL
        .iter()
        .map(|&field| {
            let oninput = {
                let usage = usage.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*usage).clone();
                    next.set(field, &input.value());
                    // The vdom value may not change, so strip the DOM value too.
                    let clean = next.get(field).to_string();
                    if input.value() != clean {
                        input.set_value(&clean);
                    }
                    usage.set(next);
                })
            };
            let id = format!("tracker-{}", field.name());
            html! {
                <label class="tracker-field" for={id.clone()}>
                    <span>{field.label()}</span>
                    <input
                        id={id}
                        name={field.name()}
                        type="text"
                        inputmode="numeric"
                        autocomplete="off"
                        value={usage.get(field).to_string()}
                        oninput={oninput}
                    />
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <div class="tracker-backdrop" style={BACKDROP_MOTION.style(entrance)} onclick={close.clone()}>
            <div
                class="tracker-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="tracker-title"
                style={DIALOG_MOTION.style(entrance)}
                onclick={keep_open}
            >
                <h2 id="tracker-title">{"Water Usage Tracker"}</h2>
                <p class="tracker-intro">
                    {"Log your daily water usage to help conserve water and combat the global water crisis."}
                </p>
                <form class="tracker-form" onsubmit={submit}>
                    { fields }
                    <hr />
                    <p class="tracker-total">{format!("Total Water Usage: {} liters", total.display())}</p>
                    <p class={classes!("tracker-verdict", verdict.class())}>{verdict.message()}</p>
                    <div class="tracker-actions">
                        <button type="button" class="tracker-reset" onclick={reset}>{"Reset"}</button>
                        <button type="button" class="tracker-close" onclick={close}>{"Close"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
