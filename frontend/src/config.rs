use log::Level;

pub const SITE_NAME: &str = "Demo Day";
pub const SUPPORT_EMAIL: &str = "hello@demoday.dev";

/// Project cards shown per page on the gallery.
pub const PROJECTS_PER_PAGE: usize = 3;
/// Newest projects featured on the home page.
pub const FEATURED_PROJECTS: usize = 3;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://demoday.dev"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
