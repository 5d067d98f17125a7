//! Lockfile (`.deep_lock.json`) management.
//!
//! Same document as the manifest, stamped with the time it was written.

use crate::error::DeepError;
use crate::package::Package;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCK_FILE: &str = ".deep_lock.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    pub writen_at: DateTime<Utc>,
    #[serde(flatten)]
    pub package: Package,
}

impl Lock {
    pub fn new(package: Package) -> Self {
        Self {
            writen_at: DateTime::<Utc>::default(),
            package,
        }
    }

    pub fn path(root: &Path) -> PathBuf {
        root.join(LOCK_FILE)
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Stamps the current time and overwrites `root/.deep_lock.json`.
    pub fn write_file(&mut self, root: &Path) -> Result<PathBuf, DeepError> {
        self.writen_at = Utc::now();
        let content = serde_json::to_string_pretty(self)?;
        let path = Self::path(root);
        fs::write(&path, content).map_err(|source| DeepError::Write {
            file: path.clone(),
            source,
        })?;
        Ok(path)
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.package.dependencies.iter().find(|p| p.name == name)
    }
}
