use std::collections::BTreeSet;

use crate::domain::project::Project;
use crate::domain::sort::SortKey;

pub const ALL_TAGS_OPTION: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub text: Option<String>,
    pub tag: Option<String>,
    pub sort: SortKey,
}

impl ProjectQuery {
    pub fn new(text: Option<&str>, tag: Option<&str>, sort: SortKey) -> Self {
        Self {
            text: text.map(str::to_string),
            tag: tag.and_then(select_tag),
            sort,
        }
    }
}

/// Filters then sorts. The input slice is left untouched.
pub fn apply_query(projects: &[Project], query: &ProjectQuery) -> Vec<Project> {
    let normalized = NormalizedQuery::from(query);
    let mut view: Vec<Project> = projects
        .iter()
        .filter(|project| matches_query(project, &normalized))
        .cloned()
        .collect();
    sort_projects(&mut view, query.sort);
    view
}

#[derive(Debug, Clone, Default)]
struct NormalizedQuery {
    text: Option<String>,
    tag: Option<String>,
}

impl From<&ProjectQuery> for NormalizedQuery {
    fn from(value: &ProjectQuery) -> Self {
        Self {
            text: normalize_scalar(value.text.as_deref()),
            tag: normalize_scalar(value.tag.as_deref()),
        }
    }
}

fn matches_query(project: &Project, query: &NormalizedQuery) -> bool {
    if let Some(text) = query.text.as_deref() {
        if !matches_text(project, text) {
            return false;
        }
    }

    match query.tag.as_deref() {
        Some(tag) => project.has_tag(tag),
        None => true,
    }
}

fn matches_text(project: &Project, text: &str) -> bool {
    project.title.to_lowercase().contains(text)
        || project.description.to_lowercase().contains(text)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(text))
}

// Dates compare as plain strings, which orders correctly only for
// zero-padded `YYYY-MM-DD` values. An empty date sorts as the earliest.
fn sort_projects(projects: &mut [Project], sort: SortKey) {
    match sort {
        SortKey::Newest => projects.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Oldest => projects.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::TitleAsc => projects.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::TitleDesc => projects.sort_by(|a, b| b.title.cmp(&a.title)),
        SortKey::Unsorted => {}
    }
}

/// Distinct tags across the collection, lower-cased and sorted.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|project| project.tags.iter())
        .map(|tag| tag.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Filter choices: the `all` option followed by every tag.
pub fn tag_options(projects: &[Project]) -> Vec<String> {
    let mut options = vec![ALL_TAGS_OPTION.to_string()];
    options.extend(all_tags(projects));
    options
}

/// Maps a chosen tag option to an active tag; `all` or blank clears it.
pub fn select_tag(option: &str) -> Option<String> {
    let normalized = normalize_scalar(Some(option))?;
    if normalized == ALL_TAGS_OPTION {
        None
    } else {
        Some(normalized)
    }
}

fn normalize_scalar(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
