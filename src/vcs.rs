//! Version-control client.
//!
//! Only Git is driven end to end. The other families are still recognized by
//! their metadata directories so they can be pruned from vendored copies.

use crate::process::{CommandRunner, Invocation};
use anyhow::{Result, bail};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    Bazaar,
    Git,
    Mercurial,
    Subversion,
}

impl VcsKind {
    /// Checked in this order when looking at a vendored copy.
    pub const ALL: [VcsKind; 4] = [
        VcsKind::Bazaar,
        VcsKind::Git,
        VcsKind::Mercurial,
        VcsKind::Subversion,
    ];

    pub fn metadata_dir(self) -> &'static str {
        match self {
            VcsKind::Bazaar => ".bzr",
            VcsKind::Git => ".git",
            VcsKind::Mercurial => ".hg",
            VcsKind::Subversion => ".svn",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VcsKind::Bazaar => "bzr",
            VcsKind::Git => "git",
            VcsKind::Mercurial => "hg",
            VcsKind::Subversion => "svn",
        }
    }
}

/// Thin wrapper over the `git` executable.
pub struct Git {
    runner: Arc<dyn CommandRunner>,
    show_progress: bool,
}

impl Git {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            show_progress: false,
        }
    }

    /// Shows a spinner while cloning.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest = dest.to_string_lossy().to_string();
        let inv = Invocation::new("git", ["clone", "-v", url, dest.as_str()]);

        let pb = self.show_progress.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.blue} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷"),
            );
            pb.set_message(format!("Cloning {}...", url));
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        });

        let result = self.run(&inv);
        if let Some(pb) = pb {
            match &result {
                Ok(_) => pb.finish_with_message(format!("{} Cloned {}", "✓".green(), url)),
                Err(_) => pb.finish_with_message(format!("{} Failed {}", "x".red(), url)),
            }
        }
        result.map(|_| ())
    }

    pub fn checkout(&self, repo: &Path, revision: &str) -> Result<()> {
        self.run(&Invocation::new("git", ["checkout", revision]).current_dir(repo))
            .map(|_| ())
    }

    /// Resolves `revision` to the full commit id.
    pub fn rev_parse(&self, repo: &Path, revision: &str) -> Result<String> {
        let stdout = self.run(&Invocation::new("git", ["rev-parse", revision]).current_dir(repo))?;
        Ok(stdout.trim_end_matches(['\n', '\r']).to_string())
    }

    fn run(&self, inv: &Invocation) -> Result<String> {
        let output = self.runner.run(inv)?;
        if !output.success {
            bail!("`{}` failed: {}", inv.display(), output.failure_message());
        }
        Ok(output.stdout)
    }
}

/// HTTPS remote for a forge-hosted import path.
pub fn remote_url(import_path: &str) -> String {
    format!("https://{}.git", import_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::CommandOutput;
    use std::io;
    use std::sync::Mutex;

    struct Scripted {
        output: CommandOutput,
        seen: Mutex<Vec<Invocation>>,
    }

    impl CommandRunner for Scripted {
        fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
            self.seen.lock().unwrap().push(invocation.clone());
            Ok(self.output.clone())
        }
    }

    fn scripted(success: bool, stdout: &str, stderr: &str) -> Arc<Scripted> {
        Arc::new(Scripted {
            output: CommandOutput {
                success,
                code: Some(if success { 0 } else { 128 }),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
            seen: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn test_rev_parse_trims_newline() {
        let runner = scripted(true, "0123456789abcdef\n", "");
        let git = Git::new(runner.clone());
        let hash = git.rev_parse(Path::new("/v/pkg"), "v1.0.0").unwrap();
        assert_eq!(hash, "0123456789abcdef");

        let seen = runner.seen.lock().unwrap();
        assert_eq!(seen[0].args, vec!["rev-parse", "v1.0.0"]);
        assert_eq!(seen[0].dir.as_deref(), Some(Path::new("/v/pkg")));
    }

    #[test]
    fn test_failed_command_carries_stderr() {
        let git = Git::new(scripted(false, "", "fatal: not a git repository"));
        let err = git.checkout(Path::new("/v/pkg"), "master").unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn test_remote_url_and_metadata_dirs() {
        assert_eq!(
            remote_url("github.com/pkg/errors"),
            "https://github.com/pkg/errors.git"
        );
        let dirs: Vec<_> = VcsKind::ALL.iter().map(|k| k.metadata_dir()).collect();
        assert_eq!(dirs, vec![".bzr", ".git", ".hg", ".svn"]);
    }
}
