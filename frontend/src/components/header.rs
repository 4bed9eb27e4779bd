use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tracker::Tracker;
use crate::config;
use crate::error::MountError;
use crate::utils::mount::ModalHost;
use crate::Route;

const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Gallery, "Gallery"),
    (Route::Tips, "Tips"),
    (Route::Contact, "Contact"),
];

const HEADER_CSS: &str = r#"
    .site-header {
        position: relative;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 0.5rem;
        width: 100%;
        max-width: 90vw;
        min-height: 15vmin;
        margin: 0.75rem auto;
        padding: 0.5rem 1rem;
        border-radius: 1rem;
        background: black;
        color: white;
        box-sizing: border-box;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.5rem;
        margin: 0;
    }
    .brand-mark {
        color: #10b981;
        font-size: 7vmin;
    }
    .nav-desktop {
        display: flex;
        gap: 1rem;
        align-items: center;
    }
    .nav-link {
        color: white;
        text-decoration: none;
        transition: color 700ms;
    }
    .nav-link:hover,
    .nav-link.active {
        color: #34d399;
    }
    .tracker-button,
    .menu-toggle {
        height: 40px;
        min-width: 40px;
        padding: 0 1rem;
        border: none;
        border-radius: 4px;
        background: white;
        color: #059669;
        font-weight: 600;
        cursor: pointer;
    }
    .tracker-button:hover,
    .menu-toggle:hover {
        background: #f0f0f0;
    }
    .menu-toggle {
        display: none;
    }
    .nav-mobile {
        position: absolute;
        top: 100%;
        right: 1rem;
        display: none;
        flex-direction: column;
        gap: 0.5rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: black;
        z-index: 40;
    }
    @media (max-width: 768px) {
        .brand { font-size: 1.125rem; }
        .brand-mark { font-size: 5vmin; }
        .site-header { max-width: 95vw; }
        .nav-desktop,
        .tracker-button.desktop-only {
            display: none;
        }
        .menu-toggle { display: block; }
        .nav-mobile { display: flex; }
    }
"#;

pub fn nav_class(route: &Route, current: Option<&Route>) -> Classes {
    classes!("nav-link", (current == Some(route)).then_some("active"))
}

fn nav_links(current: Option<&Route>, on_pick: Option<Callback<MouseEvent>>) -> Html {
    NAV_LINKS
        .iter()
        .map(|(route, label)| {
            html! {
                <span onclick={on_pick.clone()}>
                    <Link<Route> to={route.clone()} classes={nav_class(route, current)}>
                        {*label}
                    </Link<Route>>
                </span>
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub modal_host: Result<ModalHost, MountError>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_modal_open = use_state(|| false);
    let is_menu_open = use_state(|| false);
    let current = use_route::<Route>();

    let open_tracker = {
        let is_modal_open = is_modal_open.clone();
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_modal_open.set(true);
            is_menu_open.set(false);
        })
    };
    let close_tracker = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_| is_modal_open.set(false))
    };
    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };
    let close_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(false))
    };

    html! {
        <>
            <style>{HEADER_CSS}</style>
            <header class="site-header">
                <Tracker
                    open={*is_modal_open}
                    on_close={close_tracker}
                    host={props.modal_host.clone()}
                />
                <h1 class="brand">
                    <span class="brand-mark" aria-hidden="true">{"❄"}</span>
                    {config::SITE_NAME}
                </h1>
                <nav class="nav-desktop">
                    { nav_links(current.as_ref(), None) }
                </nav>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={(*is_menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    {"☰"}
                </button>
                <button class="tracker-button desktop-only" onclick={open_tracker.clone()}>
                    {"Tracker"}
                </button>
                if *is_menu_open {
                    <nav class="nav-mobile">
                        { nav_links(current.as_ref(), Some(close_menu)) }
                        <button class="tracker-button" onclick={open_tracker}>{"Tracker"}</button>
                    </nav>
                }
            </header>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_current_route_is_highlighted() {
        let about = nav_class(&Route::About, Some(&Route::About));
        assert!(about.contains("active"));
        assert!(about.contains("nav-link"));

        let home = nav_class(&Route::Home, Some(&Route::About));
        assert!(!home.contains("active"));

        let unknown = nav_class(&Route::Tips, None);
        assert!(!unknown.contains("active"));
    }

    #[test]
    fn every_page_is_linked() {
        let routes: Vec<_> = NAV_LINKS.iter().map(|(route, _)| route.clone()).collect();
        assert_eq!(
            routes,
            vec![Route::Home, Route::About, Route::Gallery, Route::Tips, Route::Contact]
        );
    }
}
