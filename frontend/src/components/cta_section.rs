use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// A secondary, external call to action shown under the main button.
#[derive(Clone, PartialEq)]
pub struct ExternalLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub heading: AttrValue,
    pub subheading: AttrValue,
    pub button_label: AttrValue,
    pub to: Route,
    #[prop_or_default]
    pub secondary: Option<ExternalLink>,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    html! {
        <section class="footer-cta">
            <div class="footer-content">
                <h2>{&props.heading}</h2>
                <p class="subtitle">{&props.subheading}</p>
                <Link<Route> to={props.to.clone()} classes="forward-link">
                    <button class="hero-cta">{&props.button_label}</button>
                </Link<Route>>
                {
                    if let Some(link) = &props.secondary {
                        html! {
                            <a href={link.href.clone()} target="_blank" rel="noopener noreferrer" class="cta-secondary">
                                {&link.label}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .footer-cta {
                        padding: 6rem 2rem;
                        text-align: center;
                        background: linear-gradient(to bottom, transparent, rgba(30, 144, 255, 0.08));
                        border-top: 1px solid rgba(30, 144, 255, 0.1);
                    }
                    .footer-content {
                        max-width: 720px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-cta h2 {
                        font-size: 2.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .footer-cta .subtitle {
                        color: #999;
                        font-size: 1.2rem;
                        line-height: 1.6;
                    }
                    .hero-cta {
                        background: #1E90FF;
                        color: white;
                        border: none;
                        padding: 1rem 2.5rem;
                        border-radius: 8px;
                        font-size: 1.1rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .hero-cta:hover {
                        background: #1976D2;
                        transform: translateY(-2px);
                    }
                    .cta-secondary {
                        color: #7EB2FF;
                        text-decoration: none;
                    }
                    .cta-secondary:hover {
                        text-decoration: underline;
                    }
                    @media (max-width: 768px) {
                        .footer-cta h2 {
                            font-size: 1.8rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
