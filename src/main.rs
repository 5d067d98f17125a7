//! # deep CLI Entry Point
//!
//! Parses arguments with clap and routes them to the handlers in
//! [`deep::commands`]. Running `deep` without a subcommand vendors the
//! project in the current directory.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;

use deep::commands::{self, ProjectArgs};
use deep::config::KeepKind;
use deep::tree;

#[derive(Parser)]
#[command(name = "deep")]
#[command(about = "Vendor the dependencies of a Go project", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone every third-party import into vendor/ and write deep.json
    Vendor {
        #[command(flatten)]
        project: ProjectArgs,
        /// Skip a cleanup step (vcs, test); can be repeated
        #[arg(long, value_enum)]
        keep: Vec<KeepKind>,
        /// Never prompt; existing vendored copies are kept
        #[arg(long)]
        no_input: bool,
        /// Extra arguments, passed through untouched
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// List the third-party packages of the project
    List {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Show the dependency tree recorded in deep.json
    Tree {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Generate shell completions
    Completion { shell: Shell },
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => commands::vendor::handle_vendor(&ProjectArgs::default(), &[], true, &[]).map(drop),
        Some(Commands::Vendor {
            project,
            keep,
            no_input,
            args,
        }) => commands::vendor::handle_vendor(project, keep, !*no_input, args).map(drop),
        Some(Commands::List { project }) => commands::list::handle_list(project),
        Some(Commands::Tree { project }) => {
            let resolved = project.resolve()?;
            tree::print_tree(&resolved.root)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}
