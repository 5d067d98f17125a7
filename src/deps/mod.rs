//! Dependency vendoring pipeline.
//!
//! A run goes through these steps, strictly in order:
//!
//! 1. **Discover**: ask the first usable provider for the target's imports,
//!    keep third-party packages only
//! 2. **Vendor**: clone each package into `vendor/`, asking before an
//!    existing copy is wiped
//! 3. **Pin**: resolve the requested version to a commit id
//! 4. **Prune**: drop nested `vendor/` trees, VCS metadata and `_test.go` files
//! 5. **Persist**: write `deep.json` and `.deep_lock.json`
//!
//! Fatal problems come back as [`DeepError`]; problems the run can survive
//! are logged and collected in [`RunReport::issues`].
//!
//! [`DeepError`]: crate::error::DeepError

mod fetch;
mod prune;
mod vendor;

use crate::log::Logger;
use crate::package::Package;
use crate::process::CommandRunner;
use crate::prompt::Prompter;
use crate::providers::Providers;
use crate::vcs::{Git, VcsKind};
use std::path::PathBuf;
use std::sync::Arc;

/// Pipeline step an [`Issue`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vendor,
    CommitHash,
    NestedVendor,
    Vcs,
    TestFiles,
}

/// A problem the run logged and moved past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub package: String,
    pub stage: Stage,
    pub message: String,
}

/// Result of the discovery step.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Provider that produced the list, if any could be used.
    pub provider: Option<&'static str>,
    pub packages: Vec<Package>,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub provider: Option<&'static str>,
    /// Packages as persisted, with commit ids filled in.
    pub packages: Vec<Package>,
    /// Freshly cloned packages.
    pub fetched: Vec<String>,
    /// Packages whose existing vendored copy was kept.
    pub skipped: Vec<String>,
    pub issues: Vec<Issue>,
    pub manifest: Option<PathBuf>,
    pub lock: Option<PathBuf>,
}

impl RunReport {
    /// True when the manifest and lock were written.
    pub fn persisted(&self) -> bool {
        self.manifest.is_some() && self.lock.is_some()
    }

    fn record(&mut self, log: &dyn Logger, package: &str, stage: Stage, message: String) {
        log.warn(&message);
        self.issues.push(Issue {
            package: package.to_string(),
            stage,
            message,
        });
    }
}

/// Wires providers, git, the prompt and the logger into one pipeline.
pub struct Deep {
    log: Arc<dyn Logger>,
    providers: Providers,
    vcs: Vec<VcsKind>,
    git: Git,
    prompter: Box<dyn Prompter>,
}

impl Deep {
    /// Pipeline with the default provider registry.
    pub fn new(
        log: Arc<dyn Logger>,
        runner: Arc<dyn CommandRunner>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        let providers = Providers::with_defaults(log.clone(), runner.clone());
        Self {
            log,
            providers,
            vcs: VcsKind::ALL.to_vec(),
            git: Git::new(runner),
            prompter,
        }
    }

    pub fn with_providers(mut self, providers: Providers) -> Self {
        self.providers = providers;
        self
    }

    /// Shows a spinner while cloning.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.git = self.git.with_progress(show_progress);
        self
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }
}
