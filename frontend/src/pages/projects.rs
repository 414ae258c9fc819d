use log::debug;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::pagination::Pagination;
use crate::components::project_card::ProjectGrid;
use crate::config::PROJECTS_PER_PAGE;
use crate::seo::{use_page_meta, PageMeta};

pub const META: PageMeta = PageMeta {
    title: "Projects",
    description: "Browse every project demoed at our student hackathons, newest first.",
    path: "/projects",
};

#[function_component(Projects)]
pub fn projects() -> Html {
    use_page_meta(META);

    let catalog = use_memo(|_| Catalog::embedded(), ());
    let current_page = use_state(|| 1usize);
    let total_pages = catalog.total_pages(PROJECTS_PER_PAGE);

    let on_page_change = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            debug!("Showing projects page {}", page);
            current_page.set(page);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <div class="projects-page">
            <section class="projects-hero">
                <h1>{"Project Showcase"}</h1>
                <p>{format!("{} projects built in a weekend or less.", catalog.len())}</p>
            </section>
            {
                if catalog.is_empty() {
                    html! {
                        <p class="projects-empty">{"No projects to show yet. Check back after the next event!"}</p>
                    }
                } else {
                    html! {
                        <ProjectGrid projects={catalog.page(*current_page, PROJECTS_PER_PAGE).to_vec()} />
                    }
                }
            }
            <Pagination
                current_page={*current_page}
                total_pages={total_pages}
                on_page_change={on_page_change}
            />
            <style>
                {r#"
                    .projects-page {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 8rem 2rem 4rem;
                    }
                    .projects-hero {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .projects-hero h1 {
                        font-size: 3rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .projects-hero p, .projects-empty {
                        color: #999;
                        font-size: 1.1rem;
                        text-align: center;
                    }
                "#}
            </style>
        </div>
    }
}
