use std::error::Error;
use std::fmt;

use tracing::info;

use crate::catalog::{self, CatalogState};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, ShowcaseConfig};
use crate::domain::project::{parse_tags, Project, ProjectInput, ValidationError};
use crate::project_id::{IdGenerator, UuidIdGenerator};
use crate::query::{all_tags, ProjectQuery};
use crate::store::{KeyValueStore, ProjectStore, SqliteKeyValueStore, StoreError};

/// Holds the collection loaded at startup and persists it after each change.
pub struct App<S = SqliteKeyValueStore> {
    store: ProjectStore<S>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    projects: Vec<Project>,
}

/// Fields to change on edit. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProjectEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub tags: Option<String>,
}

impl ProjectEdit {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.date.is_some()
            || self.tags.is_some()
    }

    fn apply_to(self, current: &Project) -> ProjectInput {
        let mut input = ProjectInput::from_project(current);
        if let Some(title) = self.title {
            input.title = title;
        }
        if let Some(description) = self.description {
            input.description = description;
        }
        if let Some(date) = self.date {
            input.date = date;
        }
        if let Some(tags) = self.tags {
            input.tags = parse_tags(&tags);
        }
        input
    }
}

impl App<SqliteKeyValueStore> {
    pub fn open(db_path: &str, config: &ShowcaseConfig) -> Result<Self, AppError> {
        let kv = SqliteKeyValueStore::open(db_path)?;
        Ok(Self::with_parts(
            ProjectStore::new(kv, config.storage_key.clone()),
            Box::new(UuidIdGenerator),
            Box::new(SystemClock),
        ))
    }
}

impl<S: KeyValueStore> App<S> {
    pub fn with_parts(
        store: ProjectStore<S>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let projects = store.load();
        Self {
            store,
            ids,
            clock,
            projects,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn state(&self, view: ProjectQuery) -> CatalogState {
        CatalogState::new(self.projects.clone(), view)
    }

    pub fn tags(&self) -> Vec<String> {
        all_tags(&self.projects)
    }

    pub fn show(&self, id: &str) -> Option<&Project> {
        catalog::find(&self.projects, id)
    }

    pub fn create_project(&mut self, input: ProjectInput) -> Result<Project, AppError> {
        let (next, record) =
            catalog::create(&self.projects, input, self.ids.as_mut(), self.clock.as_ref())?;
        self.commit(next)?;
        info!(id = %record.id, title = %record.title, "project created");
        Ok(record)
    }

    /// Returns `None` when no project has `id`; nothing is written then.
    pub fn update_project(
        &mut self,
        id: &str,
        edit: ProjectEdit,
    ) -> Result<Option<Project>, AppError> {
        if !edit.has_changes() {
            return Err(AppError::InvalidArgument(
                "edit requires at least one field change".to_string(),
            ));
        }
        let Some(current) = self.show(id) else {
            return Ok(None);
        };
        let input = edit.apply_to(current);
        let next = catalog::update(&self.projects, id, input)?;
        self.commit(next)?;
        info!(id, "project updated");
        Ok(self.show(id).cloned())
    }

    /// Returns whether a project was removed.
    pub fn delete_project(&mut self, id: &str) -> Result<bool, AppError> {
        let next = catalog::delete(&self.projects, id);
        if next.len() == self.projects.len() {
            return Ok(false);
        }
        self.commit(next)?;
        info!(id, "project deleted");
        Ok(true)
    }

    /// Drops the stored blob and goes back to the default collection.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.store.clear()?;
        self.projects = self.store.load();
        info!(key = self.store.key(), "stored projects cleared");
        Ok(())
    }

    fn commit(&mut self, next: Vec<Project>) -> Result<(), AppError> {
        self.store.save(&next)?;
        self.projects = next;
        Ok(())
    }
}

#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Config(ConfigError),
    Validation(ValidationError),
    InvalidArgument(String),
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(err) => write!(f, "{}", err),
            AppError::Config(err) => write!(f, "{}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::InvalidArgument(message) => write!(f, "{}", message),
            AppError::NotFound(id) => write!(f, "project '{}' not found", id),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Store(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::InvalidArgument(_) => None,
            AppError::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        AppError::Store(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Validation(value)
    }
}
