//! Discovery by scanning the project's Go sources.
//!
//! Walks the project root, asks the [`ImportScanner`] for each file's
//! imports and keeps the ones that look like third-party root packages.
//! Unreadable files are logged and skipped; a broken file never aborts the
//! scan.

use super::Provider;
use super::imports::{GoImportScanner, ImportScanner};
use crate::log::Logger;
use crate::package::Package;
use crate::stdlib;
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use walkdir::WalkDir;

const FIXTURE_DIR: &str = "testdata";
const SOURCE_EXT: &str = "go";
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Characters Go rejects in import paths, plus whitespace and U+FFFD.
static IMPORT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[^\s!"#$%&'()*,:;<=>?\[\\\]^`{|}\x{FFFD}]+$"##)
        .expect("import path pattern is valid")
});

pub struct GoParser {
    log: Arc<dyn Logger>,
    scanner: Box<dyn ImportScanner>,
}

impl GoParser {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self::with_scanner(log, Box::new(GoImportScanner))
    }

    pub fn with_scanner(log: Arc<dyn Logger>, scanner: Box<dyn ImportScanner>) -> Self {
        Self { log, scanner }
    }

    fn collect_imports(&self, root: &Path, ignore_test_files: bool) -> Vec<String> {
        let mut imports = Vec::new();
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || e.file_name() != FIXTURE_DIR);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.log.warn(&format!("Error reading package files: {}", e));
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != SOURCE_EXT) {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if ignore_test_files && file_name.ends_with(TEST_FILE_SUFFIX) {
                continue;
            }

            match self.scanner.imports(path) {
                Ok(found) => imports.extend(found),
                Err(e) => self.log.warn(&format!("Skipping {}: {:#}", path.display(), e)),
            }
        }
        imports
    }
}

/// True for imports of `current_pkg` itself or anything below it.
/// Matches at a path boundary, unlike the raw `<current>/vendor` prefix of
/// [`Package::is_root_package`].
fn is_self_import(import_path: &str, current_pkg: &str) -> bool {
    import_path
        .strip_prefix(current_pkg)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Rejects characters Go forbids, rooted paths and empty, `.` or `..`
/// segments, so a name can never point outside `vendor/`.
pub fn is_valid_import_path(import_path: &str) -> bool {
    IMPORT_PATH.is_match(import_path)
        && import_path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

impl Provider for GoParser {
    fn name(&self) -> &'static str {
        "go-parser"
    }

    fn can_use(&self, _root: &Path, _current_pkg: &str) -> bool {
        true
    }

    fn packages(&self, root: &Path, current_pkg: &str, ignore_test_files: bool) -> Result<Vec<Package>> {
        let mut unique: BTreeMap<String, Package> = BTreeMap::new();
        for import_path in self.collect_imports(root, ignore_test_files) {
            if import_path.is_empty()
                || stdlib::is_stdlib(&import_path)
                || is_self_import(&import_path, current_pkg)
            {
                continue;
            }
            if !is_valid_import_path(&import_path) {
                self.log.debug(&format!("Ignoring malformed import path {:?}", import_path));
                continue;
            }
            unique
                .entry(import_path.clone())
                .or_insert_with(|| Package::head(import_path));
        }

        Ok(unique
            .into_values()
            .filter(|pkg| pkg.is_root_package(current_pkg))
            .collect())
    }
}
