//! Fatal errors of a vendoring run.
//!
//! Anything that ends up here aborts the pipeline. Per-package problems that
//! the run can survive are reported as [`crate::deps::Issue`]s instead.

use std::path::PathBuf;

#[derive(Debug)]
pub enum DeepError {
    /// No target package was given or detected
    EmptyPackage,
    /// The selected provider failed to list packages
    Discovery { provider: String, message: String },
    /// The package is not hosted anywhere we know how to fetch from
    UnsupportedHost { name: String },
    /// Wiping an existing vendored copy failed after the user asked for it
    Wipe { path: PathBuf, source: std::io::Error },
    /// Cloning or checking out a package failed
    Fetch { name: String, message: String },
    /// Writing the manifest or lock file failed
    Write { file: PathBuf, source: std::io::Error },
    /// Encoding the manifest or lock document failed
    Serialize(serde_json::Error),
    /// Invalid `.deep.toml` or command line configuration
    Config(String),
    /// Reserved code path that has no implementation yet
    NotImplemented,
}

impl std::fmt::Display for DeepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeepError::EmptyPackage => write!(
                f,
                "Current package is empty. Are you running on a project from GOPATH?"
            ),
            DeepError::Discovery { provider, message } => {
                write!(f, "Error while getting packages from {}: {}", provider, message)
            }
            DeepError::UnsupportedHost { name } => write!(
                f,
                "Could not vendor {}: only {} packages can be fetched",
                name,
                crate::package::FORGE_PREFIX
            ),
            DeepError::Wipe { path, source } => {
                write!(f, "Could not wipe existing path {}: {}", path.display(), source)
            }
            DeepError::Fetch { name, message } => {
                write!(f, "Got error while trying to clone repository {}: {}", name, message)
            }
            DeepError::Write { file, source } => {
                write!(f, "Error while writing {}: {}", file.display(), source)
            }
            DeepError::Serialize(e) => write!(f, "Error while marshaling deep files: {}", e),
            DeepError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            DeepError::NotImplemented => write!(f, "not implemented yet"),
        }
    }
}

impl std::error::Error for DeepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeepError::Wipe { source, .. } | DeepError::Write { source, .. } => Some(source),
            DeepError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DeepError {
    fn from(e: serde_json::Error) -> Self {
        DeepError::Serialize(e)
    }
}
