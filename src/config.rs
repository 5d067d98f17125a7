//! Run configuration.
//!
//! Settings come from three places, later ones winning:
//!
//! 1. Defaults (target package derived from the `GOPATH` layout)
//! 2. `.deep.toml` in the project root
//! 3. Command-line flags
//!
//! ```toml
//! package = "github.com/me/app"
//! keep = ["vcs"]
//! provider = "go-parser"
//! ignore_tests = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILE: &str = ".deep.toml";

/// Cleanup stages that can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeepKind {
    /// Keep `.git`, `.hg`, `.bzr` and `.svn` directories
    Vcs,
    /// Keep `_test.go` files
    Test,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepTypes {
    pub vcs: bool,
    pub test: bool,
}

impl KeepTypes {
    pub fn from_kinds<'a>(kinds: impl IntoIterator<Item = &'a KeepKind>) -> Self {
        let mut keep = Self::default();
        for kind in kinds {
            match kind {
                KeepKind::Vcs => keep.vcs = true,
                KeepKind::Test => keep.test = true,
            }
        }
        keep
    }
}

/// Everything one vendoring run needs from its caller.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub root: PathBuf,
    pub package: String,
    pub keep: KeepTypes,
    /// Leave `_test.go` files out of source scanning.
    pub ignore_test_files: bool,
    /// Extra arguments, passed through untouched.
    pub args: Vec<String>,
}

/// Contents of `.deep.toml`.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DeepConfig {
    pub package: Option<String>,
    #[serde(default)]
    pub keep: Vec<KeepKind>,
    pub provider: Option<String>,
    #[serde(default)]
    pub ignore_tests: bool,
}

impl DeepConfig {
    /// Reads `root/.deep.toml`, or returns defaults when there is none.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Workspaces listed in `GOPATH`, or `~/go` when it is unset.
pub fn gopaths() -> Vec<PathBuf> {
    let from_env: Vec<PathBuf> = std::env::var_os("GOPATH")
        .map(|value| {
            std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();
    if !from_env.is_empty() {
        return from_env;
    }
    dirs::home_dir().map(|home| vec![home.join("go")]).unwrap_or_default()
}

/// Import path of `root` when it lives under `<gopath>/src`.
pub fn package_from_gopaths(root: &Path, gopaths: &[PathBuf]) -> Option<String> {
    gopaths.iter().find_map(|gopath| {
        let rel = root.strip_prefix(gopath.join("src")).ok()?;
        let segments: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();
        (!segments.is_empty()).then(|| segments.join("/"))
    })
}

pub fn detect_package(root: &Path) -> Option<String> {
    package_from_gopaths(root, &gopaths())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_from_gopath_layout() {
        let gopaths = vec![PathBuf::from("/home/me/go"), PathBuf::from("/opt/work")];
        assert_eq!(
            package_from_gopaths(Path::new("/opt/work/src/github.com/me/app"), &gopaths),
            Some("github.com/me/app".to_string())
        );
        assert_eq!(
            package_from_gopaths(Path::new("/home/me/go/src/example.com/tool"), &gopaths),
            Some("example.com/tool".to_string())
        );
        assert_eq!(package_from_gopaths(Path::new("/home/me/go/src"), &gopaths), None);
        assert_eq!(package_from_gopaths(Path::new("/tmp/app"), &gopaths), None);
    }

    #[test]
    fn test_keep_types() {
        let keep = KeepTypes::from_kinds(&[KeepKind::Test]);
        assert!(keep.test);
        assert!(!keep.vcs);
        assert_eq!(KeepTypes::from_kinds(&[]), KeepTypes::default());
    }

    #[test]
    fn test_load_config_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(DeepConfig::load(dir.path())?, DeepConfig::default());

        fs::write(
            dir.path().join(CONFIG_FILE),
            "package = \"github.com/me/app\"\nkeep = [\"vcs\", \"test\"]\nprovider = \"go-parser\"\n",
        )?;
        let config = DeepConfig::load(dir.path())?;
        assert_eq!(config.package.as_deref(), Some("github.com/me/app"));
        assert_eq!(config.keep, vec![KeepKind::Vcs, KeepKind::Test]);
        assert_eq!(config.provider.as_deref(), Some("go-parser"));
        assert!(!config.ignore_tests);
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(CONFIG_FILE), "keep = [\"main\"]\n")?;
        assert!(DeepConfig::load(dir.path()).is_err());

        fs::write(dir.path().join(CONFIG_FILE), "packages = \"x\"\n")?;
        assert!(DeepConfig::load(dir.path()).is_err());
        Ok(())
    }
}
