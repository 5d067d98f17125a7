//! Discovery through `go list`.
//!
//! Delegates to the Go toolchain, which already knows the full transitive
//! dependency set of every package under the target.

use super::Provider;
use crate::log::Logger;
use crate::package::Package;
use crate::process::{CommandRunner, Invocation};
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

const GO_BINARY: &str = "go";
const DEPS_TEMPLATE: &str = r#"{{ join .Deps "\n" }}"#;

pub struct GoList {
    log: Arc<dyn Logger>,
    runner: Arc<dyn CommandRunner>,
    check_path: bool,
}

impl GoList {
    pub fn new(log: Arc<dyn Logger>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            log,
            runner,
            check_path: true,
        }
    }

    /// Skips the `PATH` lookup in `can_use`, for runners that fake `go`.
    pub fn assume_available(mut self) -> Self {
        self.check_path = false;
        self
    }
}

impl Provider for GoList {
    fn name(&self) -> &'static str {
        "go-list"
    }

    fn can_use(&self, _root: &Path, _current_pkg: &str) -> bool {
        !self.check_path || which::which(GO_BINARY).is_ok()
    }

    fn packages(&self, root: &Path, current_pkg: &str, _ignore_test_files: bool) -> Result<Vec<Package>> {
        let pattern = format!("{}/...", current_pkg);
        let inv = Invocation::new(GO_BINARY, ["list", "-f", DEPS_TEMPLATE, pattern.as_str()])
            .current_dir(root);
        self.log.debug(&format!("Running {}", inv.display()));

        let output = self
            .runner
            .run(&inv)
            .with_context(|| format!("Failed to run {}", inv.display()))?;
        if !output.success {
            bail!("{}", output.failure_message());
        }

        let mut seen = HashSet::new();
        let packages = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && seen.insert(line.to_string()))
            .map(Package::head)
            .filter(|pkg| pkg.is_root_package(current_pkg))
            .collect();
        Ok(packages)
    }
}
