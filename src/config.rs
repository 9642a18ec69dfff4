//! Project configuration.
//!
//! Defaults can be overridden by a `.txedit.toml` in the project root:
//!
//! ```toml
//! backup_dir = ".txedit_backups"
//! exclude = [".git", "build", "__pycache__"]
//! reference_pattern = "**/*.{c,cc,cpp,cxx,h,hh,hpp,hxx}"
//! ```
//!
//! Command-line flags are applied on top by the caller.

use crate::error::{EditError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};

pub const CONFIG_FILE: &str = ".txedit.toml";
pub const DEFAULT_BACKUP_DIR: &str = ".txedit_backups";
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "build", "__pycache__"];
pub const DEFAULT_REFERENCE_PATTERN: &str = "**/*.{c,cc,cpp,cxx,h,hh,hpp,hxx}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backup directory; relative paths resolve against the project root.
    pub backup_dir: PathBuf,
    /// Top-level directory names never scanned.
    pub exclude: Vec<String>,
    /// Files searched for references when a file is moved.
    pub reference_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            reference_pattern: DEFAULT_REFERENCE_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Loads `<root>/.txedit.toml`, or defaults if it does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EditError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;
        log::debug!("Loading configuration from {}", path.display());
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let doc = content.parse::<DocumentMut>()?;
        let mut config = Self::default();

        for (key, item) in doc.iter() {
            match key {
                "backup_dir" => config.backup_dir = PathBuf::from(expect_str(key, item)?),
                "exclude" => config.exclude = expect_str_array(key, item)?,
                "reference_pattern" => {
                    config.reference_pattern = expect_str(key, item)?.to_string()
                }
                other => log::warn!("Ignoring unknown configuration key '{}'", other),
            }
        }

        Ok(config)
    }
}

fn expect_str<'a>(key: &str, item: &'a Item) -> Result<&'a str> {
    item.as_str()
        .ok_or_else(|| EditError::InvalidInput(key.to_string(), "expected a string".to_string()))
}

fn expect_str_array(key: &str, item: &Item) -> Result<Vec<String>> {
    let array = item.as_array().ok_or_else(|| {
        EditError::InvalidInput(key.to_string(), "expected an array of strings".to_string())
    })?;

    array
        .iter()
        .map(|value| {
            value.as_str().map(str::to_string).ok_or_else(|| {
                EditError::InvalidInput(key.to_string(), "expected an array of strings".to_string())
            })
        })
        .collect()
}
