use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::components::cta_section::{CtaSection, ExternalLink};
use crate::components::logo_cloud::LogoCloud;
use crate::components::project_card::ProjectGrid;
use crate::components::support_card::SupportCard;
use crate::config::FEATURED_PROJECTS;
use crate::seo::{use_page_meta, PageMeta};
use crate::Route;

pub const META: PageMeta = PageMeta {
    title: "",
    description: "Demo Day showcases what students build at our weekend hackathons.",
    path: "/",
};

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(META);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let catalog = use_memo(|_| Catalog::embedded(), ());

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Built in a weekend. Shown to the world."}</h1>
                    <p class="hero-subtitle">
                        {"Every project from our student hackathons, from first commit to final pitch."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Projects} classes="forward-link">
                            <button class="hero-cta">{"Browse Projects"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Faq} classes="faq-link">
                            {"How it works"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <LogoCloud />

            <section class="featured">
                <h2>{"Fresh from the last event"}</h2>
                <ProjectGrid projects={catalog.newest(FEATURED_PROJECTS).to_vec()} />
            </section>

            <section class="how-it-works">
                <h2>{"From idea to demo"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"Form a team"}</h3>
                        <p>{"Bring friends or meet teammates at the kickoff. Two to four people works best."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Build for 48 hours"}</h3>
                        <p>{"Mentors from our partners drop by with advice, hardware and too much pizza."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Demo on stage"}</h3>
                        <p>{"Pitch in two minutes and your project lands on this showcase for good."}</p>
                    </div>
                </div>
            </section>

            <SupportCard />

            <CtaSection
                heading="Ready to build something?"
                subheading="Sign-ups for the next hackathon open four weeks before the event."
                button_label="See past projects"
                to={Route::Projects}
                secondary={Some(ExternalLink {
                    label: AttrValue::Static("Follow us for dates"),
                    href: AttrValue::Static("https://github.com/demoday-dev"),
                })}
            />
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 2rem 4rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at top, rgba(30, 144, 255, 0.25), transparent 60%);
                        z-index: 0;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 800px;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        line-height: 1.1;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        color: #999;
                        font-size: 1.3rem;
                        margin: 1.5rem 0 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .faq-link {
                        color: #7EB2FF;
                        text-decoration: none;
                    }
                    .featured, .how-it-works {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                    }
                    .featured h2, .how-it-works h2 {
                        color: #fff;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 2rem;
                    }
                    .step {
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .step h3 {
                        color: #1E90FF;
                    }
                    .step p {
                        color: #999;
                        line-height: 1.6;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.2rem;
                        }
                        .hero-cta-group {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
