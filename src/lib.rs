//! # taskroad
//!
//! An AI-assisted planner that turns a free-text goal into a prioritized,
//! dependency-linked task roadmap. A hosted model breaks the goal into task
//! records; the core pipeline orders them, resolves their free-text
//! dependency descriptions into navigable links, and tracks per-task
//! completion.
//!
//! ## Architecture Overview
//!
//! - **[`plan`]**: the ordering and dependency-resolution pipeline — priority
//!   ranking, heading index, dependency resolver, plan board, and stale
//!   generation suppression
//! - **[`llm`]**: provider-agnostic completion transport with the hosted
//!   Gemini endpoint as the default provider
//! - **[`generate`]**: goal → prompt → model → parsed task records
//! - **[`render`]**: terminal rendering of the roadmap view
//! - **[`cli`]**: argument parsing, configuration discovery, task list files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskroad::llm::GeminiProvider;
//! use taskroad::render::render_board;
//! use taskroad::{PlanBoard, PlanGenerator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = Arc::new(GeminiProvider::new("api-key"));
//!     let generator = PlanGenerator::new(provider);
//!
//!     let records = generator.generate_plan("launch the beta").await?;
//!     let board = PlanBoard::from_records(records);
//!     println!("{}", render_board(&board));
//!     Ok(())
//! }
//! ```

/// Task ordering and dependency-resolution pipeline.
///
/// Ranks task records by priority tier, builds the heading index, resolves
/// free-text dependency references into display-index links, and owns
/// per-task completion state.
pub mod plan;

/// Provider-agnostic completion transport.
///
/// A [`llm::TextCompletion`] trait plus the HTTP-backed Gemini provider used
/// for plan generation.
pub mod llm;

/// Goal-to-task-list generation.
///
/// Builds the planning prompt, calls the completion provider, and parses the
/// marker-formatted response into task records.
pub mod generate;

/// Terminal rendering of the roadmap view.
pub mod render;

/// CLI argument parsing, configuration discovery, and task list file loading.
pub mod cli;

// Re-export the core pipeline types
pub use plan::{
    CompletionState, DependencyLink, HeadingIndex, PlanBoard, PlanSession, RankedTask, TaskCard,
    TaskRecord,
};

// Re-export the generation entry points
pub use generate::{GenerateError, PlanGenerator};

// Re-export the provider seam
pub use llm::{GeminiProvider, TextCompletion};
