use std::error::Error;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::sort::SortKey;
use crate::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub storage_key: String,
    pub default_sort: SortKey,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_sort: SortKey::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfigFile {
    #[serde(default)]
    storage_key: Option<String>,
    #[serde(default)]
    default_sort: Option<String>,
}

impl ShowcaseConfig {
    /// Reads `path`; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw).map_err(|err| match err {
                ConfigError::Parse { source, .. } => ConfigError::Parse {
                    path: Some(path.to_path_buf()),
                    source,
                },
                other => other,
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let file: RawConfigFile =
            toml::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })?;
        let defaults = Self::default();
        let storage_key = match file.storage_key.as_deref().map(str::trim) {
            Some("") => return Err(ConfigError::EmptyStorageKey),
            Some(key) => key.to_string(),
            None => defaults.storage_key,
        };
        Ok(Self {
            storage_key,
            default_sort: file
                .default_sort
                .as_deref()
                .map_or(defaults.default_sort, SortKey::parse),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    EmptyStorageKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {}", err),
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config file {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => write!(f, "invalid config: {}", source),
            ConfigError::EmptyStorageKey => write!(f, "config storage_key must not be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::EmptyStorageKey => None,
        }
    }
}
