use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod catalog;
mod config;
mod seo;
mod components {
    pub mod cta_section;
    pub mod footer;
    pub mod logo_cloud;
    pub mod pagination;
    pub mod project_card;
    pub mod support_card;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod projects;
}

use components::footer::SiteFooter;
use config::SITE_NAME;
use pages::{
    faq::Faq,
    home::Home,
    not_found::NotFound,
    projects::Projects,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Faq => {
            info!("Rendering Faq page");
            html! { <Faq /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Projects} classes="nav-link">
                            {"Projects"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: rgba(26, 26, 26, 0.9);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        color: #fff;
                        font-size: 1.4rem;
                        font-weight: bold;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #ccc;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem 2rem;
                            background: rgba(26, 26, 26, 0.98);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <SiteFooter />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", SITE_NAME);
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_meta_paths_match_routes() {
        assert_eq!(pages::home::META.path, Route::Home.to_path());
        assert_eq!(pages::projects::META.path, Route::Projects.to_path());
        assert_eq!(pages::faq::META.path, Route::Faq.to_path());
        assert_eq!(pages::not_found::META.path, Route::NotFound.to_path());
    }
}
