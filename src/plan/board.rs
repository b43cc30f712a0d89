use crate::plan::index::HeadingIndex;
use crate::plan::ranker::rank;
use crate::plan::resolver::resolve;
use crate::plan::types::{CompletionState, DependencyLink, RankedTask, TaskRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A ranked task together with its resolved dependency links and completion
/// state, ready for rendering.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TaskCard {
    pub task: RankedTask,
    pub links: Vec<DependencyLink>,
    pub state: CompletionState,
}

impl TaskCard {
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }
}

/// Roadmap totals used by the render header.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSummary {
    pub total: usize,
    pub high_priority: usize,
    pub completed: usize,
}

/// One render pass worth of roadmap state.
///
/// Owns the ranked cards and the heading index built from them; both are
/// produced together and discarded together, so a card's links can never
/// point into a different pass's ordering.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanBoard {
    cards: Vec<TaskCard>,
    index: HeadingIndex,
}

impl PlanBoard {
    /// Run the full pipeline over a task list: rank, build the heading
    /// index, and resolve each task's dependencies. Total over any input;
    /// an empty list yields an empty board.
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let ranked = rank(records);
        let index = HeadingIndex::build(&ranked);
        let cards: Vec<TaskCard> = ranked
            .into_iter()
            .map(|task| {
                let links = resolve(task.record.dependencies.as_deref(), &index);
                TaskCard {
                    task,
                    links,
                    state: CompletionState::Active,
                }
            })
            .collect();

        debug!("built board with {} cards", cards.len());

        Self { cards, index }
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[TaskCard] {
        &self.cards
    }

    /// Look up a card by its 1-based display index.
    pub fn card(&self, display_index: usize) -> Option<&TaskCard> {
        display_index
            .checked_sub(1)
            .and_then(|position| self.cards.get(position))
    }

    /// The heading index built for this pass.
    pub fn index(&self) -> &HeadingIndex {
        &self.index
    }

    /// Mark a task complete. Returns false when the index is unknown or the
    /// task already completed; the transition is one-way and re-triggering
    /// it has no effect. Ranking, display indices, and other cards' links
    /// are untouched.
    pub fn complete(&mut self, display_index: usize) -> bool {
        let Some(card) = display_index
            .checked_sub(1)
            .and_then(|position| self.cards.get_mut(position))
        else {
            return false;
        };
        if card.state.is_completed() {
            return false;
        }
        card.state = CompletionState::Completed {
            completed_at: Utc::now(),
        };
        debug!("task {} completed", display_index);
        true
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Totals for the render header. High-priority counting follows the raw
    /// priority text, not the normalized tier.
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            total: self.cards.len(),
            high_priority: self
                .cards
                .iter()
                .filter(|card| {
                    card.task
                        .record
                        .priority
                        .as_deref()
                        .unwrap_or("")
                        .to_uppercase()
                        .contains("HIGH")
                })
                .count(),
            completed: self.cards.iter().filter(|card| card.is_completed()).count(),
        }
    }
}

/// Proof that a generation request was the latest one issued when it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// Holds the current board and suppresses stale generation responses.
///
/// Each generation request takes a ticket before going out; when the
/// response arrives, `install` only accepts it if no newer ticket has been
/// issued since. A stale response's ranked list and index are discarded
/// together, so at most one board (and one heading index) exists at a time.
#[derive(Debug, Default)]
pub struct PlanSession {
    latest_generation: u64,
    board: Option<PlanBoard>,
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation request, invalidating all earlier tickets.
    pub fn begin(&mut self) -> GenerationTicket {
        self.latest_generation += 1;
        GenerationTicket(self.latest_generation)
    }

    /// Install the response for `ticket` as the current board, unless a
    /// newer request has started since. Returns the installed board, or
    /// None when the response was stale and dropped.
    pub fn install(
        &mut self,
        ticket: GenerationTicket,
        records: Vec<TaskRecord>,
    ) -> Option<&PlanBoard> {
        if ticket.0 != self.latest_generation {
            info!(
                "discarding stale generation {} (latest is {})",
                ticket.0, self.latest_generation
            );
            return None;
        }
        self.board = Some(PlanBoard::from_records(records));
        self.board.as_ref()
    }

    pub fn board(&self) -> Option<&PlanBoard> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut PlanBoard> {
        self.board.as_mut()
    }
}
