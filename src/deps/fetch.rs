//! Fetching packages into `vendor/` and pinning them to a commit.

use super::{Deep, RunReport, Stage};
use crate::error::DeepError;
use crate::package::{FORGE_PREFIX, Package};
use crate::prompt::should_wipe_path;
use crate::vcs::{self, VcsKind};
use std::fs;
use std::io;
use std::path::Path;

impl Deep {
    /// Makes sure every package has a vendored copy. Declined wipes keep
    /// the package in the list with whatever is already on disk.
    pub(super) fn vendor_packages(
        &self,
        root: &Path,
        packages: &[Package],
        report: &mut RunReport,
    ) -> Result<(), DeepError> {
        for pkg in packages {
            // Before the prompt: an unsupported host fails with nothing wiped.
            self.ensure_fetchable(pkg)?;

            let vendored = pkg.vendored_path(root);
            let exists = match vendored.try_exists() {
                Ok(exists) => exists,
                Err(e) => {
                    report.record(
                        self.log.as_ref(),
                        &pkg.name,
                        Stage::Vendor,
                        format!(
                            "Got error while checking path {}: {}. Skipping",
                            vendored.display(),
                            e
                        ),
                    );
                    continue;
                }
            };

            if exists {
                if !should_wipe_path(self.prompter.as_ref(), &vendored.display().to_string()) {
                    self.log
                        .info(&format!("Skipping existing path: {}", vendored.display()));
                    report.skipped.push(pkg.name.clone());
                    continue;
                }
                remove_path(&vendored).map_err(|source| DeepError::Wipe {
                    path: vendored.clone(),
                    source,
                })?;
            }

            self.fetch_package(root, pkg)?;
            report.fetched.push(pkg.name.clone());
        }
        Ok(())
    }

    fn ensure_fetchable(&self, pkg: &Package) -> Result<(), DeepError> {
        if pkg.name.starts_with(FORGE_PREFIX) {
            return Ok(());
        }
        self.log.error(&format!(
            "Could not vendor {} as it's not starting with {}",
            pkg.name, FORGE_PREFIX
        ));
        Err(DeepError::UnsupportedHost {
            name: pkg.name.clone(),
        })
    }

    fn fetch_package(&self, root: &Path, pkg: &Package) -> Result<(), DeepError> {
        let dest = pkg.vendored_path(root);
        let url = vcs::remote_url(&pkg.name);
        let fetch_error = |e: anyhow::Error| DeepError::Fetch {
            name: pkg.name.clone(),
            message: format!("{:#}", e),
        };

        self.log.debug(&format!("Cloning {} into {}", url, dest.display()));
        self.git.clone_repo(&url, &dest).map_err(fetch_error)?;
        self.git.checkout(&dest, &pkg.version).map_err(fetch_error)?;
        self.log.info(&format!("Fetched {} at {}", pkg.name, pkg.version));
        Ok(())
    }

    pub(super) fn read_commit_hashes(
        &self,
        root: &Path,
        packages: &mut [Package],
        report: &mut RunReport,
    ) {
        for pkg in packages.iter_mut() {
            pkg.commit_hash = self.commit_hash(root, pkg, report);
        }
    }

    /// Commit the vendored copy is at. The first VCS metadata directory
    /// found decides; without one, or when resolution fails, the requested
    /// version is recorded as is.
    fn commit_hash(&self, root: &Path, pkg: &Package, report: &mut RunReport) -> String {
        let vendored = pkg.vendored_path(root);
        for kind in &self.vcs {
            let metadata = vendored.join(kind.metadata_dir());
            match metadata.try_exists() {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    report.record(
                        self.log.as_ref(),
                        &pkg.name,
                        Stage::CommitHash,
                        format!("Got error while checking path {}: {}", metadata.display(), e),
                    );
                    continue;
                }
            }

            return match kind {
                VcsKind::Git => match self.git.rev_parse(&vendored, &pkg.version) {
                    Ok(hash) if !hash.is_empty() => hash,
                    Ok(_) => {
                        report.record(
                            self.log.as_ref(),
                            &pkg.name,
                            Stage::CommitHash,
                            format!("Empty revision for package {} version {}", pkg.name, pkg.version),
                        );
                        pkg.version.clone()
                    }
                    Err(e) => {
                        report.record(
                            self.log.as_ref(),
                            &pkg.name,
                            Stage::CommitHash,
                            format!(
                                "Error while reading package {} version {}: {:#}",
                                pkg.name, pkg.version, e
                            ),
                        );
                        pkg.version.clone()
                    }
                },
                other => {
                    report.record(
                        self.log.as_ref(),
                        &pkg.name,
                        Stage::CommitHash,
                        format!(
                            "Cannot resolve {} revisions of {}, recording version {}",
                            other.name(),
                            pkg.name,
                            pkg.version
                        ),
                    );
                    pkg.version.clone()
                }
            };
        }
        pkg.version.clone()
    }
}

/// Removes a directory tree, a file or a symlink.
pub(super) fn remove_path(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
