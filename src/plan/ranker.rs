use crate::plan::types::{PriorityTier, RankedTask, TaskRecord};
use tracing::debug;

/// Order tasks by descending priority weight and assign display indices.
///
/// The sort key is the priority weight alone: tasks with equal weight keep
/// their original relative order, and no secondary key (timeline, due date)
/// is consulted. Every input task receives a position; malformed priorities
/// bucket as medium, and an empty input yields an empty output.
pub fn rank(tasks: Vec<TaskRecord>) -> Vec<RankedTask> {
    let mut tiered: Vec<(PriorityTier, TaskRecord)> = tasks
        .into_iter()
        .map(|record| (PriorityTier::from_text(record.priority.as_deref()), record))
        .collect();

    // Vec::sort_by is stable, which is the contract here.
    tiered.sort_by(|a, b| b.0.weight().cmp(&a.0.weight()));

    let ranked: Vec<RankedTask> = tiered
        .into_iter()
        .enumerate()
        .map(|(position, (tier, record))| RankedTask {
            display_index: position + 1,
            tier,
            record,
        })
        .collect();

    debug!("ranked {} tasks", ranked.len());

    ranked
}
