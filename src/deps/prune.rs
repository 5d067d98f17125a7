//! Cleanup of vendored copies. Failures here never stop the run.

use super::fetch::remove_path;
use super::{RunReport, Stage};
use crate::log::Logger;
use crate::package::{Package, VENDOR_DIR};
use crate::providers::TEST_FILE_SUFFIX;
use crate::vcs::VcsKind;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// Collapses vendor trees bundled inside dependencies into the top-level one.
pub(super) fn wipe_nested_vendor(
    log: &dyn Logger,
    root: &Path,
    packages: &[Package],
    report: &mut RunReport,
) {
    for pkg in packages {
        let nested = pkg.vendored_path(root).join(VENDOR_DIR);
        match fs::remove_dir_all(&nested) {
            Ok(()) => log.debug(&format!("Removed nested vendor folder {}", nested.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => report.record(
                log,
                &pkg.name,
                Stage::NestedVendor,
                format!("Error while wiping nested vendor folder {}: {}", nested.display(), e),
            ),
        }
    }
}

pub(super) fn wipe_vcs(
    log: &dyn Logger,
    root: &Path,
    packages: &[Package],
    vcs: &[VcsKind],
    report: &mut RunReport,
) {
    for pkg in packages {
        let vendored = pkg.vendored_path(root);
        for kind in vcs {
            let dir = vendored.join(kind.metadata_dir());
            // `.git` is a plain file in worktrees and submodules.
            match remove_path(&dir) {
                Ok(()) => log.debug(&format!("Removed {}", dir.display())),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => report.record(
                    log,
                    &pkg.name,
                    Stage::Vcs,
                    format!("Error while removing vcs dir for package {}: {}", pkg.name, e),
                ),
            }
        }
    }
}

pub(super) fn wipe_test_files(
    log: &dyn Logger,
    root: &Path,
    packages: &[Package],
    report: &mut RunReport,
) {
    for pkg in packages {
        let mut removed = 0usize;
        for entry in WalkDir::new(pkg.vendored_path(root)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    report.record(
                        log,
                        &pkg.name,
                        Stage::TestFiles,
                        format!("Error while wiping test files: {}", e),
                    );
                    continue;
                }
            };
            if !entry.file_type().is_file()
                || !entry.file_name().to_string_lossy().ends_with(TEST_FILE_SUFFIX)
            {
                continue;
            }
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => report.record(
                    log,
                    &pkg.name,
                    Stage::TestFiles,
                    format!("Error while removing {}: {}", entry.path().display(), e),
                ),
            }
        }
        if removed > 0 {
            log.debug(&format!("Removed {} test files from {}", removed, pkg.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLogger;

    fn vendored(root: &Path, name: &str, files: &[&str]) -> Package {
        let pkg = Package::head(name);
        let dir = pkg.vendored_path(root);
        for file in files {
            let path = dir.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "package x\n").unwrap();
        }
        pkg
    }

    #[test]
    fn test_prunes_nested_vendor_vcs_and_tests() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let pkg = vendored(
            root,
            "github.com/pkg/errors",
            &[
                "errors.go",
                "errors_test.go",
                "sub/sub_test.go",
                "vendor/github.com/x/y/y.go",
                ".git/HEAD",
                ".hg/store",
            ],
        );
        let packages = vec![pkg.clone()];
        let log = MemoryLogger::new();
        let mut report = RunReport::default();

        wipe_nested_vendor(&log, root, &packages, &mut report);
        wipe_vcs(&log, root, &packages, &VcsKind::ALL, &mut report);
        wipe_test_files(&log, root, &packages, &mut report);

        let base = pkg.vendored_path(root);
        assert!(base.join("errors.go").exists());
        assert!(!base.join("errors_test.go").exists());
        assert!(!base.join("sub/sub_test.go").exists());
        assert!(base.join("sub").exists());
        assert!(!base.join("vendor").exists());
        assert!(!base.join(".git").exists());
        assert!(!base.join(".hg").exists());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_git_file_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let pkg = vendored(root, "github.com/pkg/errors", &["errors.go"]);
        let git_file = pkg.vendored_path(root).join(".git");
        fs::write(&git_file, "gitdir: ../../.git/modules/errors\n").unwrap();
        let log = MemoryLogger::new();
        let mut report = RunReport::default();

        wipe_vcs(&log, root, &[pkg], &VcsKind::ALL, &mut report);

        assert!(!git_file.exists());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_cleanup_failure_is_recorded_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        // A `vendor` file cannot be removed as a directory tree.
        let broken = vendored(root, "github.com/a/broken", &["vendor"]);
        let fine = vendored(root, "github.com/b/fine", &["vendor/github.com/x/y/y.go"]);
        let log = MemoryLogger::new();
        let mut report = RunReport::default();

        wipe_nested_vendor(&log, root, &[broken, fine.clone()], &mut report);

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].stage, Stage::NestedVendor);
        assert_eq!(report.issues[0].package, "github.com/a/broken");
        assert!(!fine.vendored_path(root).join("vendor").exists());
        assert!(!log.messages_at(crate::log::Level::Warn).is_empty());
    }

    #[test]
    fn test_missing_package_dir_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let packages = vec![Package::head("github.com/gone/away")];
        let log = MemoryLogger::new();
        let mut report = RunReport::default();

        wipe_nested_vendor(&log, dir.path(), &packages, &mut report);
        wipe_vcs(&log, dir.path(), &packages, &VcsKind::ALL, &mut report);
        assert!(report.issues.is_empty());

        wipe_test_files(&log, dir.path(), &packages, &mut report);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].stage, Stage::TestFiles);
        assert_eq!(report.issues[0].package, "github.com/gone/away");
    }
}
