//! # deep - Go dependency vendoring
//!
//! deep finds the third-party packages a Go project imports, clones each of
//! them into the project's `vendor/` directory, pins them to a commit and
//! records the result in `deep.json` and `.deep_lock.json`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Vendor everything the project imports
//! deep vendor --package github.com/me/app
//!
//! # See what would be vendored
//! deep list
//! ```
//!
//! ## Module Organization
//!
//! - [`deps`] - The vendoring pipeline
//! - [`providers`] - Package discovery strategies
//! - [`package`] - Package records and import path classification
//! - [`manifest`] / [`lock`] - Persisted output files
//! - [`commands`] - CLI command handlers

/// CLI command handlers extracted from main.
pub mod commands;

/// Run configuration (`.deep.toml`, GOPATH detection).
pub mod config;

/// The vendoring pipeline.
pub mod deps;

/// Fatal pipeline errors.
pub mod error;

/// Lock file (`.deep_lock.json`).
pub mod lock;

/// Leveled, injectable logging.
pub mod log;

/// Manifest file (`deep.json`).
pub mod manifest;

/// Package records and import path classification.
pub mod package;

/// External command execution.
pub mod process;

/// Confirmation prompts.
pub mod prompt;

/// Package discovery strategies.
pub mod providers;

/// Go standard library package table.
pub mod stdlib;

/// `deep tree` output.
pub mod tree;

/// Version control operations.
pub mod vcs;
