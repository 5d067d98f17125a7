//! Package discovery providers.
//!
//! A provider answers two questions about a project: can you work here, and
//! which packages does the target import. Providers are kept in an explicit,
//! ordered [`Providers`] registry; the first one that can work wins.
//!
//! ## Built-in providers
//!
//! - `native` - placeholder for a resolver that reads `deep.json`, never usable
//! - `go-list` - asks `go list` for the dependency set
//! - `go-parser` - scans the project's `.go` files for imports

mod imports;
mod native;
mod source_scan;
mod toolchain_list;

pub use imports::{GoImportScanner, ImportScanner, parse_imports};
pub use native::Native;
pub use source_scan::{GoParser, TEST_FILE_SUFFIX, is_valid_import_path};
pub use toolchain_list::GoList;

use crate::error::DeepError;
use crate::log::Logger;
use crate::package::Package;
use crate::process::CommandRunner;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub trait Provider {
    /// Short identifier, used in logs and to force a provider by name.
    fn name(&self) -> &'static str;

    fn can_use(&self, root: &Path, current_pkg: &str) -> bool;

    /// Packages imported by `current_pkg`, unique by name.
    fn packages(&self, root: &Path, current_pkg: &str, ignore_test_files: bool) -> Result<Vec<Package>>;
}

/// Names accepted by [`Providers::only`].
pub const PROVIDER_NAMES: [&str; 3] = ["native", "go-list", "go-parser"];

#[derive(Default)]
pub struct Providers {
    providers: Vec<Box<dyn Provider>>,
}

impl Providers {
    pub fn new() -> Self {
        Self::default()
    }

    /// `native`, then `go-list`, then `go-parser` as the fallback.
    pub fn with_defaults(log: Arc<dyn Logger>, runner: Arc<dyn CommandRunner>) -> Self {
        let mut providers = Self::new();
        providers
            .register(Box::new(Native::new(log.clone())))
            .register(Box::new(GoList::new(log.clone(), runner)))
            .register(Box::new(GoParser::new(log)));
        providers
    }

    /// A registry holding just the provider called `name`.
    pub fn only(
        name: &str,
        log: Arc<dyn Logger>,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, DeepError> {
        let provider: Box<dyn Provider> = match name {
            "native" => Box::new(Native::new(log)),
            "go-list" => Box::new(GoList::new(log, runner)),
            "go-parser" => Box::new(GoParser::new(log)),
            other => {
                return Err(DeepError::Config(format!(
                    "unknown provider '{}' (expected one of: {})",
                    other,
                    PROVIDER_NAMES.join(", ")
                )));
            }
        };
        let mut providers = Self::new();
        providers.register(provider);
        Ok(providers)
    }

    pub fn register(&mut self, provider: Box<dyn Provider>) -> &mut Self {
        self.providers.push(provider);
        self
    }

    /// First registered provider that can work on `root`.
    pub fn select(&self, root: &Path, current_pkg: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.can_use(root, current_pkg))
            .map(|p| p.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
