//! Command line argument parsing
//!
//! Subcommands:
//! - `plan`: generate a roadmap for a goal and print it
//! - `render`: render a roadmap from a JSON task list without calling the model
//! - `interactive`: run the interactive planning session

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "taskroad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn a goal into a prioritized, dependency-linked task roadmap")]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a roadmap for a goal and print it
    Plan {
        /// The goal to break down into tasks
        goal: String,
        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
    /// Render a roadmap from a JSON task list file without calling the model
    Render {
        /// Path to a JSON task list (an array of tasks, or an object with a "tasks" array)
        file: PathBuf,
        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
    /// Interactive session: submit goals, inspect dependencies, mark tasks complete
    Interactive {
        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

impl Args {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Plan { verbose, .. }
            | Commands::Render { verbose, .. }
            | Commands::Interactive { verbose, .. } => *verbose,
        }
    }
}
