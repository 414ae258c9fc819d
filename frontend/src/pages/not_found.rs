use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::{use_page_meta, PageMeta};
use crate::Route;

pub const META: PageMeta = PageMeta {
    title: "Page not found",
    description: "The page you're looking for doesn't exist or has been moved.",
    path: "/404",
};

/// 404 page.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_meta(META);

    html! {
        <div class="not-found-page">
            <span class="not-found-code">{"404"}</span>
            <h1>{"Page Not Found"}</h1>
            <p>{"The page you're looking for doesn't exist or has been moved."}</p>
            <div class="not-found-links">
                <Link<Route> to={Route::Home} classes="forward-link">
                    <button class="hero-cta">{"Go Home"}</button>
                </Link<Route>>
                <Link<Route> to={Route::Projects} classes="faq-link">
                    {"Browse projects"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                    .not-found-page {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 2rem 4rem;
                    }
                    .not-found-code {
                        font-size: 6rem;
                        font-weight: bold;
                        color: rgba(30, 144, 255, 0.3);
                    }
                    .not-found-page h1 {
                        color: #fff;
                    }
                    .not-found-page p {
                        color: #999;
                        margin-bottom: 2rem;
                    }
                    .not-found-links {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .not-found-links .faq-link {
                        color: #7EB2FF;
                        text-decoration: none;
                    }
                    .hero-cta {
                        background: #1E90FF;
                        color: white;
                        border: none;
                        padding: 1rem 2.5rem;
                        border-radius: 8px;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                "#}
            </style>
        </div>
    }
}
