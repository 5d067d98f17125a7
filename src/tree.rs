//! Dependency tree of the last run.
//!
//! `deep tree` reads `deep.json` and prints the project with its vendored
//! packages:
//!
//! ```text
//! github.com/me/app (HEAD)
//! ├── github.com/pkg/errors (HEAD @ 645ef00)
//! └── github.com/sirupsen/logrus/hooks (HEAD)
//! ```

use crate::manifest::Manifest;
use crate::package::Package;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

pub fn print_tree(root: &Path) -> Result<()> {
    let manifest = Manifest::load(root).with_context(|| {
        format!(
            "No {} in {}. Run `deep vendor` first",
            crate::manifest::MANIFEST_FILE,
            root.display()
        )
    })?;
    let project = &manifest.package;

    println!("{} ({})", project.name.bold().cyan(), project.version);
    if project.dependencies.is_empty() {
        println!("└── (no dependencies)");
        return Ok(());
    }

    let count = project.dependencies.len();
    for (i, dep) in project.dependencies.iter().enumerate() {
        let prefix = if i == count - 1 { "└──" } else { "├──" };
        println!("{} {} ({})", prefix, dep.name.bold(), describe(dep).dimmed());
    }
    Ok(())
}

/// Version plus the short commit id when it differs from the version.
fn describe(pkg: &Package) -> String {
    if pkg.commit_hash.is_empty() || pkg.commit_hash == pkg.version {
        pkg.version.clone()
    } else {
        format!("{} @ {:.7}", pkg.version, pkg.commit_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_shortens_commit() {
        let mut pkg = Package::head("github.com/pkg/errors");
        assert_eq!(describe(&pkg), "HEAD");

        pkg.commit_hash = "645ef00459ed84a119197bfb8d8205042c6df63d".to_string();
        assert_eq!(describe(&pkg), "HEAD @ 645ef00");

        pkg.commit_hash = "HEAD".to_string();
        assert_eq!(describe(&pkg), "HEAD");
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(print_tree(dir.path()).is_err());
    }
}
