use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::Route;

fn copyright_line(year: i32) -> String {
    format!("© {} {}. Built by students, for students.", year, SITE_NAME)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="legal-links">
                <Link<Route> to={Route::Projects}>{"Projects"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
            </div>
            <p>{copyright_line(year)}</p>
            <style>
                {r#"
                    .site-footer {
                        padding: 2rem;
                        text-align: center;
                        color: #666;
                        font-size: 0.9rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .site-footer a {
                        color: #7EB2FF;
                        text-decoration: none;
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_site() {
        let line = copyright_line(2025);
        assert!(line.starts_with("© 2025 "));
        assert!(line.contains(SITE_NAME));
    }
}
