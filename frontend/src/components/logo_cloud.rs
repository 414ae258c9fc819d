use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponsor {
    pub name: &'static str,
    pub logo: &'static str,
    pub href: &'static str,
}

pub const SPONSORS: &[Sponsor] = &[
    Sponsor { name: "Northwind Labs", logo: "/assets/logos/northwind.svg", href: "https://northwind.example" },
    Sponsor { name: "Campus Makerspace", logo: "/assets/logos/makerspace.svg", href: "https://makerspace.example" },
    Sponsor { name: "Open Transit", logo: "/assets/logos/opentransit.svg", href: "https://opentransit.example" },
    Sponsor { name: "Greenline Energy", logo: "/assets/logos/greenline.svg", href: "https://greenline.example" },
    Sponsor { name: "Student Union", logo: "/assets/logos/union.svg", href: "https://union.example" },
    Sponsor { name: "Pixel Foundry", logo: "/assets/logos/pixelfoundry.svg", href: "https://pixelfoundry.example" },
];

#[derive(Properties, PartialEq)]
pub struct LogoCloudProps {
    #[prop_or(AttrValue::Static("Trusted by teams and partners from"))]
    pub heading: AttrValue,
    #[prop_or(SPONSORS)]
    pub sponsors: &'static [Sponsor],
}

#[function_component(LogoCloud)]
pub fn logo_cloud(props: &LogoCloudProps) -> Html {
    html! {
        <section class="logo-cloud">
            <p class="logo-cloud-heading">{&props.heading}</p>
            <div class="logo-grid">
                {
                    props.sponsors.iter().map(|sponsor| html! {
                        <a href={sponsor.href} target="_blank" rel="noopener noreferrer" class="logo-item" title={sponsor.name}>
                            <img src={sponsor.logo} alt={sponsor.name} loading="lazy" />
                        </a>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .logo-cloud {
                        padding: 3rem 2rem;
                        text-align: center;
                    }
                    .logo-cloud-heading {
                        color: #777;
                        font-size: 0.9rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 2rem;
                    }
                    .logo-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                        gap: 2rem;
                        max-width: 1000px;
                        margin: 0 auto;
                        align-items: center;
                    }
                    .logo-item img {
                        max-height: 40px;
                        max-width: 100%;
                        filter: grayscale(100%) brightness(1.6);
                        opacity: 0.6;
                        transition: all 0.3s ease;
                    }
                    .logo-item:hover img {
                        filter: none;
                        opacity: 1;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sponsors_have_alt_text_and_links() {
        for sponsor in SPONSORS {
            assert!(!sponsor.name.trim().is_empty());
            assert!(sponsor.logo.starts_with("/assets/"));
            assert!(sponsor.href.starts_with("https://"));
        }
    }
}
