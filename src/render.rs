//! Terminal rendering of a plan board.
//!
//! Produces the roadmap view: a summary header, numbered cards in ranked
//! order with their dependency links, and completion markers. Navigation and
//! completion triggers live in the interactive loop; this module only turns
//! board state into text.

use crate::plan::{PlanBoard, TaskCard};

/// Render the whole roadmap. An empty board renders the "no tasks" message
/// rather than erroring.
pub fn render_board(board: &PlanBoard) -> String {
    if board.is_empty() {
        return "No tasks generated. Try entering a more specific goal.".to_string();
    }

    let summary = board.summary();
    let mut out = String::new();
    out.push_str("Your Task Roadmap\n");
    out.push_str(&format!(
        "{} tasks planned, {} high priority\n\n",
        summary.total, summary.high_priority
    ));

    for card in board.cards() {
        out.push_str(&render_card(card));
        out.push('\n');
    }

    out
}

/// Render a single card.
pub fn render_card(card: &TaskCard) -> String {
    let task = &card.task;
    let record = &task.record;
    let mut out = String::new();

    let done = if card.is_completed() { "x" } else { " " };
    out.push_str(&format!(
        "[{done}] {}. {} ({} priority)\n",
        task.display_index,
        task.display_heading(),
        record.priority.as_deref().unwrap_or("Medium"),
    ));

    let mut meta = Vec::new();
    if let Some(timeline) = record.timeline.as_deref() {
        meta.push(format!("timeline: {timeline}"));
    }
    if let Some(due_date) = record.due_date.as_deref() {
        meta.push(format!("due: {due_date}"));
    }
    if !meta.is_empty() {
        out.push_str(&format!("      {}\n", meta.join("  ")));
    }

    if !card.links.is_empty() {
        let labels: Vec<&str> = card.links.iter().map(|link| link.label.as_str()).collect();
        out.push_str(&format!("      depends on: {}\n", labels.join(", ")));
    }

    out.push_str(&format!(
        "      {}\n",
        record.matter.as_deref().unwrap_or("No description available.")
    ));

    out
}
