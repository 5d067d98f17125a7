//! Vendor command handler
//!
//! Handles `deep vendor`, the default command.

use super::{ProjectArgs, build_deep};
use crate::config::{KeepKind, KeepTypes, RunOptions};
use crate::deps::RunReport;
use crate::log::{ConsoleLogger, Logger};
use anyhow::Result;
use std::sync::Arc;

/// `deep vendor`: vendor every third-party import of the project.
///
/// `keep` adds to whatever `.deep.toml` keeps. Without `interactive`,
/// existing vendored copies are never wiped.
pub fn handle_vendor(
    project: &ProjectArgs,
    keep: &[KeepKind],
    interactive: bool,
    args: &[String],
) -> Result<RunReport> {
    let log: Arc<dyn Logger> = Arc::new(ConsoleLogger::new(project.verbose));
    let resolved = project.resolve()?;
    if !args.is_empty() {
        log.debug(&format!("Extra arguments: {}", args.join(" ")));
    }

    let opts = RunOptions {
        root: resolved.root.clone(),
        package: resolved.package.clone(),
        keep: KeepTypes::from_kinds(resolved.config.keep.iter().chain(keep)),
        ignore_test_files: resolved.ignore_tests,
        args: args.to_vec(),
    };
    log.debug(&format!(
        "Vendoring {} in {}",
        if opts.package.is_empty() { "?" } else { opts.package.as_str() },
        opts.root.display()
    ));

    let deep = build_deep(log, &resolved, interactive)?;
    Ok(deep.run(&opts)?)
}
