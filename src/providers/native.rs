//! Reserved slot for a native resolver that reads `deep.json` directly.
//!
//! Never selected: `can_use` is always false, and calling it anyway fails
//! with [`DeepError::NotImplemented`].

use super::Provider;
use crate::error::DeepError;
use crate::lock::Lock;
use crate::log::Logger;
use crate::manifest::Manifest;
use crate::package::Package;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub struct Native {
    log: Arc<dyn Logger>,
}

impl Native {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self { log }
    }

    pub fn load_files(&self, _root: &Path) -> Result<(Manifest, Lock)> {
        self.log.debug("native resolver cannot load deep files yet");
        Err(DeepError::NotImplemented.into())
    }
}

impl Provider for Native {
    fn name(&self) -> &'static str {
        "native"
    }

    fn can_use(&self, _root: &Path, _current_pkg: &str) -> bool {
        false
    }

    fn packages(&self, _root: &Path, _current_pkg: &str, _ignore_test_files: bool) -> Result<Vec<Package>> {
        self.log.debug("native resolver cannot list packages yet");
        Err(DeepError::NotImplemented.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLogger;

    #[test]
    fn test_never_usable_and_fails_fast() {
        let native = Native::new(Arc::new(MemoryLogger::new()));
        let root = Path::new(".");
        assert!(!native.can_use(root, "example.com/app"));

        let err = native.packages(root, "example.com/app", false).unwrap_err();
        assert!(matches!(err.downcast_ref::<DeepError>(), Some(DeepError::NotImplemented)));
        assert!(native.load_files(root).is_err());
    }
}
