use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::support_card::support_mailto;
use crate::config::SUPPORT_EMAIL;
use crate::seo::{use_page_meta, PageMeta};

pub const META: PageMeta = PageMeta {
    title: "FAQ",
    description: "Who can enter, what to build and how projects end up on the showcase.",
    path: "/faq",
};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={if *is_open { "true" } else { "false" }}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_page_meta(META);

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything about entering a hackathon and getting your project showcased"}</p>
            </section>

            <section class="faq-section">
                <h2>{"Taking part"}</h2>

                <FaqItem question="Who can enter?">
                    <p>{"Any enrolled student, from any year and any degree. You don't need to write code to be useful to a team; designers, writers and pitchers win prizes too."}</p>
                </FaqItem>

                <FaqItem question="How big can a team be?">
                    <p>{"Two to four people. Solo entries are welcome but we will try to match you with a team at kickoff."}</p>
                </FaqItem>

                <FaqItem question="Does it cost anything?">
                    <p>{"No. Food, drinks, power and wifi are covered by our partners for the whole weekend."}</p>
                </FaqItem>

                <h2>{"The showcase"}</h2>

                <FaqItem question="How does a project get on this site?">
                    <p>{"Every team that demos on stage is added to the showcase after the event, with links to the demo and source if you share them."}</p>
                </FaqItem>

                <FaqItem question="Can I update or remove our project?">
                    <p>
                        {"Yes. Email "}
                        <a href={support_mailto("Showcase update")}>{SUPPORT_EMAIL}</a>
                        {" from an address on the team and we'll sort it out."}
                    </p>
                </FaqItem>

                <FaqItem question="Who owns what we build?">
                    <p>{"You do. We only ask for permission to list the project name, tagline and team name here."}</p>
                </FaqItem>
            </section>
            <style>
                {r#"
                    .faq-page {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 8rem 2rem 4rem;
                    }
                    .faq-hero {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .faq-hero h1 {
                        font-size: 2.8rem;
                        color: #fff;
                    }
                    .faq-hero p {
                        color: #999;
                    }
                    .faq-section h2 {
                        color: #7EB2FF;
                        margin: 3rem 0 1rem;
                    }
                    .faq-item {
                        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.1rem;
                        padding: 1.2rem 0;
                        cursor: pointer;
                        text-align: left;
                    }
                    .toggle-icon {
                        color: #1E90FF;
                        font-size: 1.4rem;
                    }
                    .faq-answer {
                        display: none;
                        color: #bbb;
                        line-height: 1.6;
                        padding-bottom: 1.2rem;
                    }
                    .faq-item.open .faq-answer {
                        display: block;
                    }
                    .faq-answer a {
                        color: #7EB2FF;
                    }
                "#}
            </style>
        </div>
    }
}
