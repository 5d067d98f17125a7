//! Manifest (`deep.json`) management.
//!
//! The manifest is the user-facing record of the resolved dependency tree:
//! a root package describing the project with its dependencies nested
//! below it. It is regenerated from scratch on every vendor run.

use crate::error::DeepError;
use crate::package::Package;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "deep.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub package: Package,
}

impl Manifest {
    pub fn new(package: Package) -> Self {
        Self { package }
    }

    pub fn path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Overwrites `root/deep.json`.
    pub fn write_file(&self, root: &Path) -> Result<PathBuf, DeepError> {
        let content = serde_json::to_string_pretty(self)?;
        let path = Self::path(root);
        fs::write(&path, content).map_err(|source| DeepError::Write {
            file: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Manifest {
        let mut errors = Package::new("github.com/pkg/errors", "v0.8.0");
        errors.commit_hash = "645ef00459ed84a119197bfb8d8205042c6df63d".to_string();
        let mut root = Package::head("example.com/app");
        root.dependencies = vec![errors, Package::head("gopkg.in/yaml.v2")];
        Manifest::new(root)
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let manifest = sample();
        let path = manifest.write_file(dir.path())?;
        assert_eq!(path, dir.path().join("deep.json"));

        let loaded = Manifest::load(dir.path())?;
        assert_eq!(loaded, manifest);
        Ok(())
    }

    #[test]
    fn test_document_shape() {
        let json = serde_json::to_string_pretty(&sample()).unwrap();
        let expected = r#"{
  "name": "example.com/app",
  "version": "HEAD",
  "dependencies": [
    {
      "name": "github.com/pkg/errors",
      "version": "v0.8.0",
      "commit_hash": "645ef00459ed84a119197bfb8d8205042c6df63d"
    },
    {
      "name": "gopkg.in/yaml.v2",
      "version": "HEAD"
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = sample().write_file(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, DeepError::Write { .. }));
    }
}
