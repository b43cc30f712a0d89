//! Goal-to-task-list generation.
//!
//! Builds a structured planning prompt from a free-text goal, sends it to a
//! [`TextCompletion`] provider, and parses the marker-formatted response
//! (`**Heading:** … **Matter:** …` blocks) into [`TaskRecord`]s. Content
//! quality is owned by the model; this module only guarantees the records it
//! returns carry the fields the marker format names.

use crate::llm::{CompletionError, CompletionRequest, TextCompletion};
use crate::plan::TaskRecord;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::{debug, info};

/// Upper bound on tasks parsed from a single response; the prompt asks the
/// model for 4-6.
const MAX_TASKS_PER_PLAN: usize = 6;

static TASK_BLOCK_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\A(?P<heading>.*?)\*\*Priority:\*\*(?P<priority>.*?)\*\*Timeline:\*\*(?P<timeline>.*?)\*\*Dependencies:\*\*(?P<dependencies>.*?)\*\*Due Date:\*\*(?P<due_date>.*?)\*\*Matter:\*\*(?P<matter>.*)\z",
    )
    .expect("task block pattern compiles")
});

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("goal is required")]
    EmptyGoal,

    #[error("completion provider error: {0}")]
    Completion(#[from] CompletionError),

    #[error("no tasks could be parsed from the model response")]
    UnrecognizedResponse,
}

/// Turns goals into task lists via a completion provider.
pub struct PlanGenerator {
    provider: Arc<dyn TextCompletion>,
}

impl PlanGenerator {
    pub fn new(provider: Arc<dyn TextCompletion>) -> Self {
        Self { provider }
    }

    /// Generate a task list for a goal.
    ///
    /// Empty or whitespace-only goals are rejected up front; a response the
    /// marker parser finds nothing in is an error rather than an empty plan.
    pub async fn generate_plan(&self, goal: &str) -> Result<Vec<TaskRecord>, GenerateError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(GenerateError::EmptyGoal);
        }

        info!(
            "generating plan via {} ({} char goal)",
            self.provider.provider_name(),
            goal.len()
        );

        let request = CompletionRequest::new(build_plan_prompt(goal))
            .with_temperature(0.3)
            .with_max_output_tokens(2048);

        let response = self.provider.complete(request).await?;
        debug!("model response ({} chars)", response.content.len());

        let records = parse_task_blocks(&response.content);
        if records.is_empty() {
            return Err(GenerateError::UnrecognizedResponse);
        }

        info!("parsed {} tasks from model response", records.len());
        Ok(records)
    }
}

fn build_plan_prompt(goal: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert project manager. Break down the following goal into 4-6 actionable tasks with realistic timelines.\n\n",
    );
    prompt.push_str(&format!("GOAL: {goal}\n\n"));
    prompt.push_str("For each task, provide:\n");
    prompt.push_str("- **Heading**: A clear, concise task title\n");
    prompt.push_str("- **Priority**: HIGH, MEDIUM, or LOW\n");
    prompt.push_str("- **Timeline**: Estimated duration (e.g., '2-3 days', '1 week')\n");
    prompt.push_str(
        "- **Dependencies**: What must be completed before this task (list task numbers or 'None')\n",
    );
    prompt.push_str(
        "- **Due Date**: When this task should be completed, relative to project start (e.g., 'Day 3', 'Week 2')\n",
    );
    prompt.push_str("- **Matter**: Detailed explanation of what needs to be done\n\n");
    prompt.push_str("Format your response exactly like this example:\n\n");
    prompt.push_str(
        "**Heading:** Define Project Requirements\n\
         **Priority:** HIGH\n\
         **Timeline:** 3-5 days\n\
         **Dependencies:** None\n\
         **Due Date:** Day 5\n\
         **Matter:** Conduct stakeholder interviews, analyze requirements, create detailed specifications\n\n",
    );
    prompt.push_str(
        "**Heading:** Design System Architecture\n\
         **Priority:** HIGH\n\
         **Timeline:** 1 week\n\
         **Dependencies:** Task 1\n\
         **Due Date:** Week 2\n\
         **Matter:** Create technical design documents, define APIs, plan the data model\n\n",
    );
    prompt.push_str(
        "Provide 4-6 tasks following this exact format with all markers (**Heading:**, **Priority:**, **Timeline:**, **Dependencies:**, **Due Date:**, **Matter:**).",
    );

    prompt
}

/// Parse marker-formatted task blocks out of a model response.
///
/// Blocks missing any of the six markers are skipped; priorities are
/// upper-cased at the boundary so downstream display matches what the prompt
/// asked for; at most [`MAX_TASKS_PER_PLAN`] records are returned.
fn parse_task_blocks(response: &str) -> Vec<TaskRecord> {
    let mut records = Vec::new();

    for block in response.split("**Heading:**").skip(1) {
        if records.len() == MAX_TASKS_PER_PLAN {
            break;
        }
        let Some(fields) = TASK_BLOCK_FIELDS.captures(block) else {
            debug!("skipping block without the full marker set");
            continue;
        };

        let field = |name: &str| {
            let value = fields
                .name(name)
                .map(|capture| capture.as_str().trim())
                .unwrap_or("");
            (!value.is_empty()).then(|| value.to_string())
        };

        records.push(TaskRecord {
            heading: field("heading"),
            priority: field("priority").map(|priority| priority.to_uppercase()),
            timeline: field("timeline"),
            dependencies: field("dependencies"),
            due_date: field("due_date"),
            matter: field("matter"),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionResponse, TokenUsage};
    use futures::future::BoxFuture;

    struct MockProvider {
        response: String,
    }

    impl MockProvider {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
            }
        }
    }

    impl TextCompletion for MockProvider {
        fn complete(
            &self,
            request: CompletionRequest,
        ) -> BoxFuture<'_, Result<CompletionResponse, CompletionError>> {
            let content = self.response.clone();
            Box::pin(async move {
                Ok(CompletionResponse {
                    request_id: request.id,
                    content,
                    model: "mock".to_string(),
                    usage: Some(TokenUsage {
                        input_tokens: 100,
                        output_tokens: 200,
                    }),
                })
            })
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    const SAMPLE_RESPONSE: &str = "\
**Heading:** Define Project Requirements\n\
**Priority:** high\n\
**Timeline:** 3-5 days\n\
**Dependencies:** None\n\
**Due Date:** Day 5\n\
**Matter:** Interview stakeholders and write the specification\n\
\n\
**Heading:** Design System Architecture\n\
**Priority:** HIGH\n\
**Timeline:** 1 week\n\
**Dependencies:** Task 1\n\
**Due Date:** Week 2\n\
**Matter:** Define APIs and the data model\n";

    #[tokio::test]
    async fn generates_records_from_marker_blocks() {
        let generator = PlanGenerator::new(Arc::new(MockProvider::new(SAMPLE_RESPONSE)));

        let records = generator.generate_plan("launch a product").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].heading.as_deref(),
            Some("Define Project Requirements")
        );
        assert_eq!(records[0].priority.as_deref(), Some("HIGH"));
        assert_eq!(records[0].dependencies.as_deref(), Some("None"));
        assert_eq!(records[1].dependencies.as_deref(), Some("Task 1"));
        assert_eq!(records[1].due_date.as_deref(), Some("Week 2"));
    }

    #[tokio::test]
    async fn empty_goal_is_rejected() {
        let generator = PlanGenerator::new(Arc::new(MockProvider::new(SAMPLE_RESPONSE)));

        let err = generator.generate_plan("   ").await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyGoal));
    }

    #[tokio::test]
    async fn unparseable_response_is_an_error() {
        let generator = PlanGenerator::new(Arc::new(MockProvider::new(
            "Sorry, I cannot help with that.",
        )));

        let err = generator.generate_plan("launch a product").await.unwrap_err();
        assert!(matches!(err, GenerateError::UnrecognizedResponse));
    }

    #[test]
    fn parser_caps_tasks_per_plan() {
        let mut response = String::new();
        for n in 1..=8 {
            response.push_str(&format!(
                "**Heading:** Task number {n}\n\
                 **Priority:** MEDIUM\n\
                 **Timeline:** 1 day\n\
                 **Dependencies:** None\n\
                 **Due Date:** Day {n}\n\
                 **Matter:** Step {n}\n\n"
            ));
        }

        let records = parse_task_blocks(&response);
        assert_eq!(records.len(), 6);
        assert_eq!(records[5].heading.as_deref(), Some("Task number 6"));
    }

    #[test]
    fn parser_skips_blocks_missing_markers() {
        let response = "\
**Heading:** Complete block\n\
**Priority:** LOW\n\
**Timeline:** 1 day\n\
**Dependencies:** None\n\
**Due Date:** Day 1\n\
**Matter:** Fine\n\
\n\
**Heading:** Missing everything after priority\n\
**Priority:** HIGH\n";

        let records = parse_task_blocks(response);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].heading.as_deref(), Some("Complete block"));
    }

    #[test]
    fn parser_trims_and_uppercases_fields() {
        let response = "\
**Heading:**   Spaced Out   \n\
**Priority:**  medium \n\
**Timeline:**  2 weeks \n\
**Dependencies:**  none \n\
**Due Date:**  Week 4 \n\
**Matter:**  Lots of whitespace  \n";

        let records = parse_task_blocks(response);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].heading.as_deref(), Some("Spaced Out"));
        assert_eq!(records[0].priority.as_deref(), Some("MEDIUM"));
        assert_eq!(records[0].matter.as_deref(), Some("Lots of whitespace"));
    }

    #[test]
    fn parser_finds_nothing_in_prose() {
        assert!(parse_task_blocks("Here is a plan: first do X, then Y.").is_empty());
    }

    #[test]
    fn prompt_carries_the_goal_and_markers() {
        let prompt = build_plan_prompt("ship the beta");
        assert!(prompt.contains("GOAL: ship the beta"));
        assert!(prompt.contains("**Heading:**"));
        assert!(prompt.contains("**Matter:**"));
        assert!(prompt.contains("4-6"));
    }
}
