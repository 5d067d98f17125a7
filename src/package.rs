//! Package model and classification rules.
//!
//! A [`Package`] is the record every other module passes around: providers
//! create it, the vendoring pipeline pins it, and the manifest/lock writers
//! serialize it. The predicates here are pure and must agree across all
//! call sites, so they live in one place.
//!
//! ## Classification
//!
//! - **stdlib**: listed in [`crate::stdlib::STDLIB_PACKAGES`]
//! - **third-party**: neither the target package nor stdlib
//! - **sub-package**: nested below a `github.com/<owner>/<repo>` root
//! - **root package**: not a sub-package and not under the target's own `vendor/`

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Version sentinel used when no explicit revision was requested.
pub const HEAD: &str = "HEAD";

/// Forge whose import paths map directly onto repository roots.
pub const FORGE_PREFIX: &str = "github.com";

/// Name of the vendor directory inside a project root.
pub const VENDOR_DIR: &str = "vendor";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub commit_hash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub license: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oses: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub min_go_ver: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Package>,
}

impl Package {
    /// Creates a package pinned to `version` with no metadata.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Creates a package tracking the default branch.
    pub fn head(name: impl Into<String>) -> Self {
        Self::new(name, HEAD)
    }

    pub fn is_stdlib(&self) -> bool {
        crate::stdlib::is_stdlib(&self.name)
    }

    /// Checks whether this package is contained by another package.
    ///
    /// Only forge paths have a known repository depth:
    /// `github.com/dlsniper/deep/cmd` is contained by `github.com/dlsniper/deep`.
    /// Everything else is treated as a root.
    pub fn is_sub_package(&self) -> bool {
        if self.name.starts_with(FORGE_PREFIX) {
            return self.name.matches('/').count() > 2;
        }
        false
    }

    /// Plain prefix match on `<current>/vendor`; self imports in the source
    /// scan are matched at a path boundary instead.
    pub fn is_root_package(&self, current_pkg: &str) -> bool {
        if self.name.starts_with(&format!("{}/{}", current_pkg, VENDOR_DIR)) {
            return false;
        }
        !self.is_sub_package()
    }

    pub fn is_third_party(&self, current_pkg: &str) -> bool {
        self.name != current_pkg && !self.is_stdlib()
    }

    /// Location of this package inside `root/vendor`, lexically normalized.
    pub fn vendored_path(&self, root: &Path) -> PathBuf {
        clean_path(&root.join(VENDOR_DIR).join(&self.name))
    }

    /// False when the name resolves to `root/vendor` itself or to anything
    /// outside it (`..` segments, rooted names).
    pub fn is_inside_vendor(&self, root: &Path) -> bool {
        let vendor = clean_path(&root.join(VENDOR_DIR));
        let path = self.vendored_path(root);
        path != vendor && path.starts_with(&vendor)
    }
}

/// Lexically normalizes a path: drops `.` and folds `..` into its parent.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
