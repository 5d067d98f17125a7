//! List command handler
//!
//! Discovery only: prints the third-party packages with their vendored state
//! and the commit pinned in `.deep_lock.json`, if any.

use super::{ProjectArgs, build_deep};
use crate::lock::Lock;
use crate::log::{ConsoleLogger, Logger};
use anyhow::Result;
use colored::*;
use std::sync::Arc;

/// `deep list`: show what `deep vendor` would vendor, without touching disk.
pub fn handle_list(project: &ProjectArgs) -> Result<()> {
    let log: Arc<dyn Logger> = Arc::new(ConsoleLogger::new(project.verbose));
    let resolved = project.resolve()?;
    let deep = build_deep(log.clone(), &resolved, false)?;

    let discovery = deep.discover(&resolved.root, &resolved.package, resolved.ignore_tests)?;
    let Some(provider) = discovery.provider else {
        log.warn("No discovery provider can be used for this project");
        return Ok(());
    };
    if discovery.packages.is_empty() {
        log.info(&format!("No third-party packages found ({})", provider));
        return Ok(());
    }

    // A missing or stale lock only means no pinned commits to show.
    let lock = Lock::load(&resolved.root).ok();

    println!(
        "{} third-party packages of {} ({})",
        discovery.packages.len().to_string().bold(),
        resolved.package.cyan(),
        provider.dimmed()
    );
    for pkg in &discovery.packages {
        let vendored = pkg.vendored_path(&resolved.root).is_dir();
        let marker = if vendored { "+".green() } else { "-".yellow() };
        let pinned = lock
            .as_ref()
            .and_then(|l| l.get(&pkg.name))
            .map(|locked| format!(" @ {:.7}", locked.commit_hash))
            .unwrap_or_default();
        let state = if vendored { "vendored" } else { "missing" };
        println!(
            "  {} {}{} {}",
            marker,
            pkg.name,
            pinned.dimmed(),
            format!("({})", state).dimmed()
        );
    }
    Ok(())
}
