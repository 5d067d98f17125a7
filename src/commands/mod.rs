//! CLI command handlers
//!
//! Handlers for `deep vendor` and `deep list`, kept out of main.rs so the
//! binary only does argument parsing.

pub mod list;
pub mod vendor;

use crate::config::{DeepConfig, detect_package};
use crate::deps::Deep;
use crate::error::DeepError;
use crate::log::Logger;
use crate::process::{CommandRunner, SystemRunner};
use crate::prompt::{DeclineAll, InquirePrompter, Prompter};
use crate::providers::Providers;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Flags shared by every command that works on a project.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Import path of the project (defaults to its location under GOPATH/src)
    #[arg(long, short)]
    pub package: Option<String>,
    /// Use only this discovery provider (native, go-list, go-parser)
    #[arg(long)]
    pub provider: Option<String>,
    /// Ignore imports that only appear in _test.go files
    #[arg(long)]
    pub ignore_tests: bool,
    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Project settings after merging flags, `.deep.toml` and defaults.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub package: String,
    pub config: DeepConfig,
    pub provider: Option<String>,
    pub ignore_tests: bool,
}

impl ProjectArgs {
    pub fn resolve(&self) -> Result<Project> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Could not read the current directory")?,
        };
        let root = std::path::absolute(&root)
            .with_context(|| format!("Invalid project root {}", root.display()))?;
        let config = DeepConfig::load(&root)?;

        let package = self
            .package
            .clone()
            .or_else(|| config.package.clone())
            .or_else(|| detect_package(&root))
            .unwrap_or_default();
        let provider = self.provider.clone().or_else(|| config.provider.clone());
        let ignore_tests = self.ignore_tests || config.ignore_tests;

        Ok(Project {
            root,
            package,
            config,
            provider,
            ignore_tests,
        })
    }
}

/// Builds the pipeline for a resolved project.
pub fn build_deep(
    log: Arc<dyn Logger>,
    project: &Project,
    interactive: bool,
) -> Result<Deep, DeepError> {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    let prompter: Box<dyn Prompter> = if interactive {
        Box::new(InquirePrompter)
    } else {
        Box::new(DeclineAll)
    };

    let mut deep = Deep::new(log.clone(), runner.clone(), prompter).with_progress(interactive);
    if let Some(name) = &project.provider {
        deep = deep.with_providers(Providers::only(name, log, runner)?);
    }
    Ok(deep)
}
