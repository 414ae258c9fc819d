//! Per-page `<head>` metadata: title, description, Open Graph tags and
//! the canonical link.

use log::warn;
use thiserror::Error;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config::{self, SITE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Site-relative path, e.g. `/projects`.
    pub path: &'static str,
}

impl PageMeta {
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            SITE_NAME.to_string()
        } else {
            format!("{} | {}", self.title, SITE_NAME)
        }
    }

    pub fn canonical_url(&self) -> String {
        join_url(config::get_site_url(), self.path)
    }
}

#[derive(Debug, Error)]
pub enum SeoError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

fn dom_err(err: wasm_bindgen::JsValue) -> SeoError {
    SeoError::Dom(format!("{:?}", err))
}

/// Find the head element matching `selector`, creating `tag` with the
/// given identifying attribute when it does not exist yet.
fn head_element(
    document: &Document,
    selector: &str,
    tag: &str,
    identity: (&str, &str),
) -> Result<Element, SeoError> {
    if let Some(existing) = document.query_selector(selector).map_err(dom_err)? {
        return Ok(existing);
    }
    let head = document.head().ok_or(SeoError::NoHead)?;
    let element = document.create_element(tag).map_err(dom_err)?;
    element.set_attribute(identity.0, identity.1).map_err(dom_err)?;
    head.append_child(&element).map_err(dom_err)?;
    Ok(element)
}

fn set_meta(document: &Document, key: &str, name: &str, content: &str) -> Result<(), SeoError> {
    let selector = format!("meta[{}=\"{}\"]", key, name);
    head_element(document, &selector, "meta", (key, name))?
        .set_attribute("content", content)
        .map_err(dom_err)
}

/// Write `meta` into the current document's `<head>`.
pub fn apply(meta: &PageMeta) -> Result<(), SeoError> {
    let window = web_sys::window().ok_or(SeoError::NoWindow)?;
    let document = window.document().ok_or(SeoError::NoDocument)?;

    let title = meta.document_title();
    let url = meta.canonical_url();

    document.set_title(&title);
    set_meta(&document, "name", "description", meta.description)?;
    set_meta(&document, "property", "og:title", &title)?;
    set_meta(&document, "property", "og:description", meta.description)?;
    set_meta(&document, "property", "og:url", &url)?;

    head_element(&document, "link[rel=\"canonical\"]", "link", ("rel", "canonical"))?
        .set_attribute("href", &url)
        .map_err(dom_err)
}

/// Apply `meta` once when the calling page mounts.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        move |meta| {
            if let Err(e) = apply(meta) {
                warn!("Could not update page metadata for {}: {}", meta.path, e);
            }
            || ()
        },
        meta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS: PageMeta = PageMeta {
        title: "Projects",
        description: "Everything built at our events.",
        path: "/projects",
    };

    #[test]
    fn title_carries_site_name() {
        assert_eq!(PROJECTS.document_title(), format!("Projects | {}", SITE_NAME));
    }

    #[test]
    fn empty_title_falls_back_to_site_name() {
        let home = PageMeta { title: "", ..PROJECTS };
        assert_eq!(home.document_title(), SITE_NAME);
    }

    #[test]
    fn canonical_url_joins_base_and_path() {
        assert_eq!(
            PROJECTS.canonical_url(),
            format!("{}/projects", config::get_site_url())
        );
    }

    #[test]
    fn join_url_never_doubles_slashes() {
        assert_eq!(join_url("https://a.dev/", "/faq"), "https://a.dev/faq");
        assert_eq!(join_url("https://a.dev", "faq"), "https://a.dev/faq");
        assert_eq!(join_url("https://a.dev/", "/"), "https://a.dev/");
        assert_eq!(join_url("https://a.dev", ""), "https://a.dev/");
    }
}
