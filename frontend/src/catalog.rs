use std::collections::HashSet;

use chrono::NaiveDate;
use log::{debug, error};
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_PROJECTS: &str = include_str!("../static/projects.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub team: String,
    pub tagline: String,
    pub event: String,
    pub submitted: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
}

impl Project {
    /// Month and year of submission, e.g. `March 2025`.
    pub fn submitted_label(&self) -> String {
        self.submitted.format("%B %Y").to_string()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project slug '{0}'")]
    DuplicateSlug(String),

    #[error("project '{slug}' has an empty {field}")]
    EmptyField { slug: String, field: &'static str },
}

/// Showcase projects, newest submission first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut projects: Vec<Project> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for project in &projects {
            for (field, value) in [("slug", &project.slug), ("title", &project.title)] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        slug: project.slug.clone(),
                        field,
                    });
                }
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
        }

        projects.sort_by(|a, b| {
            b.submitted
                .cmp(&a.submitted)
                .then_with(|| a.title.cmp(&b.title))
        });

        Ok(Self { projects })
    }

    /// The catalog bundled into the binary. Falls back to an empty catalog.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_PROJECTS) {
            Ok(catalog) => {
                debug!("Loaded {} showcase projects", catalog.len());
                catalog
            }
            Err(e) => {
                error!("Embedded project catalog is invalid: {}", e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn newest(&self, count: usize) -> &[Project] {
        let projects = self.projects();
        &projects[..count.min(projects.len())]
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        total_pages(self.projects.len(), per_page)
    }

    /// Projects on the 1-based `page`. Empty past the last page.
    pub fn page(&self, page: usize, per_page: usize) -> &[Project] {
        let projects = self.projects();
        let (start, end) = page_bounds(projects.len(), per_page, page);
        &projects[start..end]
    }
}

/// Number of pages needed for `item_count` items.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

fn page_bounds(item_count: usize, per_page: usize, page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, title: &str, submitted: &str) -> String {
        format!(
            r#"{{"slug":"{slug}","title":"{title}","team":"T","tagline":"x","event":"E","submitted":"{submitted}"}}"#
        )
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::from_json(EMBEDDED_PROJECTS).expect("bundled catalog parses");
        assert!(!catalog.is_empty());
        assert_eq!(Catalog::embedded(), catalog);
    }

    #[test]
    fn orders_newest_first_then_by_title() {
        let raw = format!(
            "[{},{},{}]",
            entry("old", "Old", "2024-01-01"),
            entry("zeta", "Zeta", "2025-02-01"),
            entry("alpha", "Alpha", "2025-02-01"),
        );
        let catalog = Catalog::from_json(&raw).unwrap();
        let slugs: Vec<&str> = catalog.projects().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["alpha", "zeta", "old"]);
    }

    #[test]
    fn optional_fields_default() {
        let raw = format!("[{}]", entry("solo", "Solo", "2025-03-01"));
        let catalog = Catalog::from_json(&raw).unwrap();
        let project = &catalog.projects()[0];
        assert!(project.tags.is_empty());
        assert_eq!(project.repo_url, None);
        assert_eq!(project.demo_url, None);
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let raw = format!(
            "[{},{}]",
            entry("dup", "One", "2025-01-01"),
            entry("dup", "Two", "2025-01-02"),
        );
        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(ref slug) if slug == "dup"));
    }

    #[test]
    fn rejects_blank_titles() {
        let raw = format!("[{}]", entry("blank", "  ", "2025-01-01"));
        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "title", .. }));
    }

    #[test]
    fn rejects_malformed_dates() {
        let raw = format!("[{}]", entry("bad", "Bad", "March 2025"));
        assert!(matches!(Catalog::from_json(&raw), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 3), 0);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(7, 3), 3);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn pages_slice_the_catalog() {
        let raw = format!(
            "[{},{},{}]",
            entry("a", "A", "2025-01-03"),
            entry("b", "B", "2025-01-02"),
            entry("c", "C", "2025-01-01"),
        );
        let catalog = Catalog::from_json(&raw).unwrap();

        assert_eq!(catalog.total_pages(2), 2);
        assert_eq!(catalog.page(1, 2).len(), 2);
        assert_eq!(catalog.page(2, 2)[0].slug, "c");
        assert!(catalog.page(3, 2).is_empty());
        assert_eq!(catalog.newest(10).len(), 3);
    }

    #[test]
    fn submitted_label_is_month_and_year() {
        let raw = format!("[{}]", entry("m", "M", "2025-03-16"));
        let catalog = Catalog::from_json(&raw).unwrap();
        assert_eq!(catalog.projects()[0].submitted_label(), "March 2025");
    }
}
