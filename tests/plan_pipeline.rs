//! Integration tests for the goal → plan → render pipeline.
//!
//! These drive the generator, session, board, and renderer together through
//! the public API; unit tests for the individual stages live in the module
//! files.

use futures::future::BoxFuture;
use std::sync::Arc;
use taskroad::cli::load_task_file;
use taskroad::llm::{CompletionError, CompletionRequest, CompletionResponse, TextCompletion};
use taskroad::plan::{PlanBoard, PlanSession};
use taskroad::render::render_board;
use taskroad::{DependencyLink, PlanGenerator};

struct ScriptedProvider {
    response: &'static str,
}

impl TextCompletion for ScriptedProvider {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> BoxFuture<'_, Result<CompletionResponse, CompletionError>> {
        let content = self.response.to_string();
        Box::pin(async move {
            Ok(CompletionResponse {
                request_id: request.id,
                content,
                model: "scripted".to_string(),
                usage: None,
            })
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

const ROADMAP_RESPONSE: &str = "\
**Heading:** Launch marketing site\n\
**Priority:** LOW\n\
**Timeline:** 1 week\n\
**Dependencies:** Design homepage\n\
**Due Date:** Week 4\n\
**Matter:** Publish the site once the design is final\n\
\n\
**Heading:** Design homepage\n\
**Priority:** HIGH\n\
**Timeline:** 3 days\n\
**Dependencies:** None\n\
**Due Date:** Day 3\n\
**Matter:** Wireframes and visual design for the homepage\n\
\n\
**Heading:** Write copy\n\
**Priority:** MEDIUM\n\
**Timeline:** 2 days\n\
**Dependencies:** design homepage\n\
**Due Date:** Week 1\n\
**Matter:** Draft and review all site copy\n";

fn scripted_generator() -> PlanGenerator {
    PlanGenerator::new(Arc::new(ScriptedProvider {
        response: ROADMAP_RESPONSE,
    }))
}

#[tokio::test]
async fn goal_flows_through_ranking_linking_and_rendering() {
    let generator = scripted_generator();
    let mut session = PlanSession::new();

    let ticket = session.begin();
    let records = generator.generate_plan("launch the new site").await.unwrap();
    let board = session.install(ticket, records).expect("latest ticket installs");

    // HIGH first, then MEDIUM, then LOW.
    let order: Vec<String> = board
        .cards()
        .iter()
        .map(|card| card.task.display_heading())
        .collect();
    assert_eq!(
        order,
        vec!["Design homepage", "Write copy", "Launch marketing site"]
    );

    // Both dependent tasks point at the design task's display index.
    assert_eq!(board.cards()[1].links, vec![DependencyLink::resolved(1)]);
    assert_eq!(board.cards()[2].links, vec![DependencyLink::resolved(1)]);
    assert!(board.cards()[0].links.is_empty());

    let rendered = render_board(board);
    assert!(rendered.contains("3 tasks planned, 1 high priority"));
    assert!(rendered.contains("[ ] 1. Design homepage (HIGH priority)"));
    assert!(rendered.contains("depends on: Task 1"));
}

#[tokio::test]
async fn completion_survives_navigation_but_not_regeneration() {
    let generator = scripted_generator();
    let mut session = PlanSession::new();

    let ticket = session.begin();
    let records = generator.generate_plan("launch the new site").await.unwrap();
    session.install(ticket, records);

    let board = session.board_mut().unwrap();
    assert!(board.complete(1));
    assert!(!board.complete(1));
    assert!(render_board(board).contains("[x] 1. Design homepage"));

    // A fresh generation rebuilds everything from scratch.
    let ticket = session.begin();
    let records = generator.generate_plan("launch the new site").await.unwrap();
    let board = session.install(ticket, records).unwrap();
    assert!(!board.card(1).unwrap().is_completed());
}

#[tokio::test]
async fn overlapping_generations_keep_only_the_latest() {
    let generator = scripted_generator();
    let mut session = PlanSession::new();

    let stale = session.begin();
    let stale_records = generator.generate_plan("first goal").await.unwrap();

    let latest = session.begin();
    let latest_records = generator.generate_plan("second goal").await.unwrap();

    // The stale response arrives after the newer request started; it is
    // dropped whole, board and index together.
    assert!(session.install(stale, stale_records).is_none());
    assert!(session.board().is_none());

    assert!(session.install(latest, latest_records).is_some());
    assert_eq!(session.board().unwrap().len(), 3);
}

#[test]
fn task_file_renders_without_a_model() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(
        &path,
        r#"{
            "tasks": [
                {"title": "Design schema", "priority": "LOW"},
                {"title": "Write tests", "priority": "HIGH", "dependencies": "design schema"}
            ]
        }"#,
    )
    .unwrap();

    let records = load_task_file(&path).unwrap();
    let board = PlanBoard::from_records(records);

    assert_eq!(board.cards()[0].task.display_heading(), "Write tests");
    assert_eq!(board.cards()[0].links, vec![DependencyLink::resolved(2)]);

    let rendered = render_board(&board);
    assert!(rendered.contains("2 tasks planned, 1 high priority"));
}
