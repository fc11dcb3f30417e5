use crate::clock::Clock;
use crate::domain::project::{Project, ProjectInput, ValidationError};
use crate::project_id::{generate_project_id, IdGenerator};
use crate::query::{apply_query, tag_options, ProjectQuery};

/// The collection plus the current view selection. Mutations and queries take
/// this by value or reference and hand back a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub projects: Vec<Project>,
    pub view: ProjectQuery,
}

impl CatalogState {
    pub fn new(projects: Vec<Project>, view: ProjectQuery) -> Self {
        Self { projects, view }
    }

    pub fn visible(&self) -> Vec<Project> {
        apply_query(&self.projects, &self.view)
    }

    pub fn tag_options(&self) -> Vec<String> {
        tag_options(&self.projects)
    }
}

pub fn find<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

/// Validates `input`, assigns a fresh id and places the record first.
pub fn create(
    projects: &[Project],
    input: ProjectInput,
    ids: &mut dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<(Vec<Project>, Project), ValidationError> {
    let valid = input.validate()?;
    let id = generate_project_id(ids, |candidate| find(projects, candidate).is_some());
    let date = if valid.date.is_empty() {
        clock.today()
    } else {
        valid.date
    };
    let record = Project {
        id,
        title: valid.title,
        description: valid.description,
        date,
        tags: valid.tags,
    };

    let mut next = Vec::with_capacity(projects.len() + 1);
    next.push(record.clone());
    next.extend_from_slice(projects);
    Ok((next, record))
}

/// Replaces the mutable fields of the record with `id`, keeping its position.
/// An unknown id leaves the collection as it was. A blank date stays blank.
pub fn update(
    projects: &[Project],
    id: &str,
    input: ProjectInput,
) -> Result<Vec<Project>, ValidationError> {
    let valid = input.validate()?;
    Ok(projects
        .iter()
        .map(|project| {
            if project.id == id {
                Project {
                    id: project.id.clone(),
                    title: valid.title.clone(),
                    description: valid.description.clone(),
                    date: valid.date.clone(),
                    tags: valid.tags.clone(),
                }
            } else {
                project.clone()
            }
        })
        .collect())
}

pub fn delete(projects: &[Project], id: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "catalog_tests_ext.rs"]
mod tests_ext;
