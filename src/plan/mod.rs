//! Task ordering and dependency-resolution pipeline.
//!
//! Given an unordered list of [`TaskRecord`]s with free-text priorities and
//! free-text dependency descriptions, this module deterministically orders
//! them ([`rank`]), resolves each dependency description into links to other
//! tasks on the same roadmap ([`resolve`] via a [`HeadingIndex`]), and keeps
//! a stable display-index lookup plus per-task completion state
//! ([`PlanBoard`]). [`PlanSession`] guards against stale generation
//! responses installing an outdated board.

pub mod board;
pub mod index;
pub mod ranker;
pub mod resolver;
pub mod types;


pub use board::*;
pub use index::*;
pub use ranker::*;
pub use resolver::*;
pub use types::*;
