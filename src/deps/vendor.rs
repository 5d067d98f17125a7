//! The `deep vendor` pipeline: discover, vendor, pin, prune, persist.

use super::{Deep, Discovery, RunReport, Stage, prune};
use crate::config::RunOptions;
use crate::error::DeepError;
use crate::lock::Lock;
use crate::manifest::Manifest;
use crate::package::Package;
use std::path::{Path, PathBuf};

impl Deep {
    /// Runs the whole pipeline once. Not safe to run concurrently on the
    /// same root.
    pub fn run(&self, opts: &RunOptions) -> Result<RunReport, DeepError> {
        let root = opts.root.as_path();
        let discovery = self.discover(root, &opts.package, opts.ignore_test_files)?;

        let mut report = RunReport {
            provider: discovery.provider,
            ..RunReport::default()
        };
        let mut packages = discovery.packages;
        packages.retain(|pkg| {
            let inside = pkg.is_inside_vendor(root);
            if !inside {
                report.record(
                    self.log.as_ref(),
                    &pkg.name,
                    Stage::Vendor,
                    format!("Ignoring {}: it does not resolve inside the vendor folder", pkg.name),
                );
            }
            inside
        });
        if packages.is_empty() {
            self.log.info("No packages found");
            return Ok(report);
        }
        self.log.info(&format!(
            "Vendoring {} packages into {}",
            packages.len(),
            root.join(crate::package::VENDOR_DIR).display()
        ));

        self.vendor_packages(root, &packages, &mut report)?;
        self.read_commit_hashes(root, &mut packages, &mut report);

        prune::wipe_nested_vendor(self.log.as_ref(), root, &packages, &mut report);
        if !opts.keep.vcs {
            prune::wipe_vcs(self.log.as_ref(), root, &packages, &self.vcs, &mut report);
        }
        if !opts.keep.test {
            prune::wipe_test_files(self.log.as_ref(), root, &packages, &mut report);
        }

        let (manifest, lock) = self.write_deep_files(root, &opts.package, &mut packages)?;
        report.manifest = Some(manifest);
        report.lock = Some(lock);
        report.packages = packages;

        self.log.success(&format!(
            "Vendored {} packages ({} fetched, {} kept)",
            report.packages.len(),
            report.fetched.len(),
            report.skipped.len()
        ));
        if !report.issues.is_empty() {
            self.log
                .warn(&format!("{} problems were skipped, see above", report.issues.len()));
        }
        Ok(report)
    }

    /// Lists the third-party packages of `current_pkg` with the first usable
    /// provider. No provider means no packages.
    pub fn discover(
        &self,
        root: &Path,
        current_pkg: &str,
        ignore_test_files: bool,
    ) -> Result<Discovery, DeepError> {
        if current_pkg.is_empty() {
            return Err(DeepError::EmptyPackage);
        }

        let Some(provider) = self.providers.select(root, current_pkg) else {
            self.log.debug(&format!(
                "None of the providers ({}) can be used here",
                self.providers.names().join(", ")
            ));
            return Ok(Discovery::default());
        };
        self.log.debug(&format!("Discovering packages with {}", provider.name()));

        let packages = provider
            .packages(root, current_pkg, ignore_test_files)
            .map_err(|e| DeepError::Discovery {
                provider: provider.name().to_string(),
                message: format!("{:#}", e),
            })?;

        Ok(Discovery {
            provider: Some(provider.name()),
            packages: packages
                .into_iter()
                .filter(|pkg| pkg.is_third_party(current_pkg))
                .collect(),
        })
    }

    /// Writes a one-level tree: the project at `HEAD` with every vendored
    /// package as a direct dependency.
    fn write_deep_files(
        &self,
        root: &Path,
        current_pkg: &str,
        packages: &mut [Package],
    ) -> Result<(PathBuf, PathBuf), DeepError> {
        for pkg in packages.iter_mut() {
            pkg.dependencies.clear();
        }

        let mut project = Package::head(current_pkg);
        project.dependencies = packages.to_vec();

        let manifest = Manifest::new(project.clone()).write_file(root)?;
        let lock = Lock::new(project).write_file(root)?;
        self.log
            .debug(&format!("Wrote {} and {}", manifest.display(), lock.display()));
        Ok((manifest, lock))
    }
}
