//! Fakes shared by the pipeline tests.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use deep::package::Package;
use deep::process::{CommandOutput, CommandRunner, Invocation};
use deep::prompt::Prompter;
use deep::providers::Provider;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FAKE_COMMIT: &str = "0123456789abcdef0123456789abcdef01234567";

/// Stands in for `git`. A clone materializes a small repository with a
/// `.git` dir, a test file and a nested vendor tree.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: Mutex<Vec<Invocation>>,
    pub fail_clone: bool,
    pub fail_rev_parse: bool,
}

impl FakeRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_clone() -> Arc<Self> {
        Arc::new(Self {
            fail_clone: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// First argument of every call, e.g. `clone`, `checkout`.
    pub fn subcommands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|inv| inv.args.first().cloned())
            .collect()
    }

    fn ok(stdout: &str) -> CommandOutput {
        CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn failed(stderr: &str) -> CommandOutput {
        CommandOutput {
            success: false,
            code: Some(128),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        match invocation.args.first().map(String::as_str) {
            Some("clone") => {
                if self.fail_clone {
                    return Ok(Self::failed("fatal: repository not found"));
                }
                let dest = PathBuf::from(invocation.args.last().unwrap());
                fake_checkout(&dest)?;
                Ok(Self::ok(""))
            }
            Some("checkout") => Ok(Self::ok("")),
            Some("rev-parse") if self.fail_rev_parse => {
                Ok(Self::failed("fatal: ambiguous argument"))
            }
            Some("rev-parse") => Ok(Self::ok(&format!("{}\n", FAKE_COMMIT))),
            _ => Ok(Self::failed("unexpected command")),
        }
    }
}

pub fn fake_checkout(dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest.join(".git"))?;
    fs::write(dest.join(".git/HEAD"), "ref: refs/heads/master\n")?;
    fs::write(dest.join("foo.go"), "package foo\n")?;
    fs::write(dest.join("foo_test.go"), "package foo\n")?;
    fs::create_dir_all(dest.join("vendor/github.com/other/dep"))?;
    fs::write(dest.join("vendor/github.com/other/dep/dep.go"), "package dep\n")?;
    Ok(())
}

/// Prompter that replays canned answers, then declines.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: Mutex<VecDeque<Result<String, String>>>,
    pub asked: Arc<AtomicUsize>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| Ok(a.to_string())).collect()),
            asked: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn broken() -> Self {
        Self {
            answers: Mutex::new(VecDeque::from([Err("stdin closed".to_string())])),
            asked: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, _question: &str) -> Result<String> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        match self.answers.lock().unwrap().pop_front() {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(e)) => Err(anyhow!(e)),
            None => Ok("n".to_string()),
        }
    }
}

/// Provider returning a fixed list and counting how often it was asked.
pub struct StubProvider {
    pub name: &'static str,
    pub usable: bool,
    pub result: Result<Vec<String>, String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubProvider {
    pub fn new(name: &'static str, usable: bool, packages: &[&str]) -> Self {
        Self {
            name,
            usable,
            result: Ok(packages.iter().map(|p| p.to_string()).collect()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &'static str, message: &str) -> Self {
        Self {
            name,
            usable: true,
            result: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Provider for StubProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn can_use(&self, _root: &Path, _current_pkg: &str) -> bool {
        self.usable
    }

    fn packages(&self, _root: &Path, _current_pkg: &str, _ignore: bool) -> Result<Vec<Package>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(names) => Ok(names.iter().map(Package::head).collect()),
            Err(message) => Err(anyhow!(message.clone())),
        }
    }
}
