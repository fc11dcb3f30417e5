use std::error::Error;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry. `id` is assigned at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

// Stored records may carry `null` for optional fields; read them as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Project {
    pub fn has_tag(&self, normalized_tag: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase() == normalized_tag)
    }
}

/// User-entered fields for create and update, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl ProjectInput {
    /// Builds an input from raw form-style strings; `tags` is comma separated.
    pub fn from_raw(title: &str, description: &str, date: Option<&str>, tags: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            date: date.unwrap_or("").to_string(),
            tags: parse_tags(tags),
        }
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            date: project.date.clone(),
            tags: project.tags.clone(),
        }
    }

    pub fn validate(self) -> Result<ValidProjectInput, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let tags = self
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Ok(ValidProjectInput {
            title,
            description,
            date: self.date.trim().to_string(),
            tags,
        })
    }
}

/// Trimmed input that passed validation. `date` may still be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProjectInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyDescription,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => {
                write!(f, "title and description are required (title is empty)")
            }
            ValidationError::EmptyDescription => write!(
                f,
                "title and description are required (description is empty)"
            ),
        }
    }
}

impl Error for ValidationError {}

pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
