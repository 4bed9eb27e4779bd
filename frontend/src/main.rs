use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;

mod reveal {
    pub mod browser;
    pub mod detector;
    pub mod hooks;
    pub mod monitor;
    pub mod motion;
    pub mod store;
}
mod utils {
    pub mod mount;
    pub mod scroll;
    pub mod usage;
}
mod components {
    pub mod animated;
    pub mod footer;
    pub mod header;
    pub mod tracker;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod hero;
    pub mod tips;
}

use components::footer::Footer;
use components::header::Header;
use error::MountError;
use pages::{about::About, contact::Contact, gallery::Gallery, hero::Hero, tips::Tips};
use utils::mount::ModalHost;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/gallery")]
    Gallery,
    #[at("/tips")]
    Tips,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Hero /> },
        Route::About => html! { <About /> },
        Route::Gallery => html! { <Gallery /> },
        Route::Tips => html! { <Tips /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => {
            log::info!("unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

const APP_CSS: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        background: #f9fafb;
    }
    .app {
        display: flex;
        flex-direction: column;
        align-items: center;
        min-height: 100vh;
        overflow-x: hidden;
    }
    main {
        width: 100%;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub modal_host: Result<ModalHost, MountError>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <style>{APP_CSS}</style>
            <div class="app">
                <Header modal_host={props.modal_host.clone()} />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    let modal_host = ModalHost::resolve(config::MODAL_HOST_ID);
    if let Err(err) = &modal_host {
        log::error!("{}", err);
    }
    log::info!("starting {}", config::SITE_NAME);
    yew::Renderer::<App>::with_props(AppProps { modal_host }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_routed_by_path() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/gallery"), Some(Route::Gallery));
        assert_eq!(Route::recognize("/tips"), Some(Route::Tips));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
