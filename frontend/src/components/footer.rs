use yew::prelude::*;

use crate::components::animated::Animated;
use crate::config;
use crate::reveal::hooks::{use_mount_reveal, use_reveal};
use crate::reveal::motion::{Easing, Motion};
use crate::reveal::store::RevealState;

const INFO: usize = 0;
const SUPPORT: usize = 1;

const QUICK_LINKS: [&str; 5] = ["Home", "About", "Features", "Tips", "Blog"];
const SUPPORT_LINKS: [&str; 5] = ["Contact", "Support", "FAQ", "Terms", "Privacy"];

const FOOTER_CSS: &str = r#"
    .site-footer {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        width: 100%;
        padding: 2.5rem 2rem;
        background: #111827;
        color: white;
        box-sizing: border-box;
    }
    .footer-upper {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        gap: 2rem;
        width: 100%;
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 0;
        border-bottom: 2px solid #4b5563;
    }
    .footer-brand {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        width: 33%;
    }
    .footer-brand h2 {
        font-size: 2.25rem;
        font-weight: bold;
        margin: 0;
    }
    .footer-brand p {
        font-size: 1.125rem;
        line-height: 1.6;
        margin: 0;
    }
    .subscribe {
        display: flex;
        gap: 0.5rem;
    }
    .subscribe input {
        flex: 1;
        padding: 0.6rem 0.8rem;
        background: transparent;
        border: 1px solid white;
        border-radius: 4px;
        color: white;
        font-size: 0.875rem;
    }
    .subscribe button {
        padding: 0.6rem 1.25rem;
        background: #10b981;
        border: none;
        border-radius: 4px;
        color: white;
        cursor: pointer;
    }
    .subscribe button:hover { background: #059669; }
    .footer-column {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        width: 25%;
    }
    .footer-column h3 {
        font-size: 1.5rem;
        font-weight: 600;
        margin: 0;
    }
    .footer-links {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .footer-links p {
        margin: 0;
        cursor: pointer;
        transition: color 200ms;
    }
    .footer-links p:hover { color: #34d399; }
    .footer-lower {
        width: fit-content;
        margin: 0 auto;
        text-align: center;
    }
    .accent { color: #34d399; }
    @media (max-width: 768px) {
        .footer-upper { flex-direction: column; }
        .footer-brand,
        .footer-column { width: 100%; }
        .subscribe { flex-direction: column; }
    }
"#;

fn link_list(links: &[&str], state: RevealState) -> Html {
    links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            html! {
                <Animated state={state} motion={Motion::slide(30.0, 600).stagger(700, 100, index)}>
                    <p>{*link}</p>
                </Animated>
            }
        })
        .collect()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let reveal = use_reveal(2, config::SECTION_REVEAL_THRESHOLD);
    let mounted = use_mount_reveal();
    let info = reveal.state(INFO);
    let support = reveal.state(SUPPORT);

    html! {
        <>
            <style>{FOOTER_CSS}</style>
            <Animated
                class="site-footer"
                state={mounted}
                motion={Motion::rise(50.0, 800).easing(Easing::STANDARD)}
            >
                <Animated
                    class="footer-upper"
                    node_ref={reveal.node(INFO)}
                    state={info}
                    motion={Motion::rise(30.0, 800).delay(200)}
                >
                    <div class="footer-brand">
                        <Animated state={info} motion={Motion::slide(-30.0, 600).delay(300)}>
                            <h2>{config::SITE_NAME}</h2>
                        </Animated>
                        <Animated state={info} motion={Motion::slide(-30.0, 600).delay(400)}>
                            <p>{"Delivers water tracking platform"}</p>
                        </Animated>
                        <Animated class="subscribe" state={info} motion={Motion::grow(0.95, 600).delay(500)}>
                            <input type="email" placeholder="Your Email Address" aria-label="Email address" />
                            <button type="button">{"Subscribe"}</button>
                        </Animated>
                    </div>

                    <div class="footer-column">
                        <Animated state={info} motion={Motion::slide(30.0, 600).delay(600)}>
                            <h3>{"Quick Links"}</h3>
                        </Animated>
                        <div class="footer-links">
                            { link_list(&QUICK_LINKS, info) }
                        </div>
                    </div>

                    <div class="footer-column" ref={reveal.node(SUPPORT)}>
                        <Animated state={support} motion={Motion::slide(30.0, 600).delay(600)}>
                            <h3>{"Support"}</h3>
                        </Animated>
                        <div class="footer-links">
                            { link_list(&SUPPORT_LINKS, support) }
                        </div>
                    </div>
                </Animated>

                <Animated class="footer-lower" state={mounted} motion={Motion::rise(20.0, 600).delay(1000)}>
                    <p>{"@Team "}<span class="accent">{"Sabers"}</span></p>
                </Animated>
            </Animated>
        </>
    }
}
