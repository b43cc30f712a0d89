use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task as produced by the plan generator (or any upstream source).
///
/// Every field is optional: upstream output is free text and frequently drops
/// fields, so absence must degrade to documented defaults instead of erroring.
/// Field aliases cover the synonyms different upstreams use for the same data.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TaskRecord {
    /// Display label for the task.
    #[serde(alias = "title")]
    pub heading: Option<String>,
    /// Free-text priority tier (e.g. "HIGH", "low", "Urgent"); case-insensitive.
    pub priority: Option<String>,
    /// Free-text description of prerequisite tasks, or the literal "none".
    pub dependencies: Option<String>,
    /// Estimated duration, shown as-is.
    pub timeline: Option<String>,
    /// Relative completion date, shown as-is.
    #[serde(rename = "dueDate", alias = "due_date")]
    pub due_date: Option<String>,
    /// Detailed explanation of the task, shown as-is.
    #[serde(alias = "description", alias = "content")]
    pub matter: Option<String>,
}

impl TaskRecord {
    /// Create a record with just a heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::default()
        }
    }

    /// Set the priority text.
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the dependency text.
    pub fn with_dependencies(mut self, dependencies: impl Into<String>) -> Self {
        self.dependencies = Some(dependencies.into());
        self
    }

    /// Set the timeline text.
    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    /// Set the due date text.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the description body.
    pub fn with_matter(mut self, matter: impl Into<String>) -> Self {
        self.matter = Some(matter.into());
        self
    }
}

/// Normalized priority bucket derived from free-text priority values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Bucket a free-text priority. Absent and unrecognized values are medium.
    pub fn from_text(priority: Option<&str>) -> Self {
        match priority.unwrap_or("MEDIUM").to_uppercase().as_str() {
            "HIGH" | "CRITICAL" | "URGENT" => Self::High,
            "LOW" | "MINOR" => Self::Low,
            // MEDIUM, NORMAL, and anything unrecognized
            _ => Self::Medium,
        }
    }

    /// Numeric sort weight; higher weights order first.
    pub fn weight(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// A task annotated with its 1-based position on the ranked roadmap.
///
/// The display index is assigned once by ranking and never reassigned; it is
/// the only identifier dependency links and navigation use.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RankedTask {
    pub display_index: usize,
    pub tier: PriorityTier,
    pub record: TaskRecord,
}

impl RankedTask {
    /// The label shown for this task, synthesized as "Task {n}" when the
    /// record carries no heading.
    pub fn display_heading(&self) -> String {
        match self.record.heading.as_deref() {
            Some(heading) if !heading.is_empty() => heading.to_string(),
            _ => format!("Task {}", self.display_index),
        }
    }
}

/// A resolved dependency reference.
///
/// `index` carries the target's display index when resolution succeeded;
/// otherwise the original dependency text is shown verbatim with no
/// navigation target.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DependencyLink {
    pub index: Option<usize>,
    pub label: String,
}

impl DependencyLink {
    /// A link that navigates to the task at `display_index`.
    pub fn resolved(display_index: usize) -> Self {
        Self {
            index: Some(display_index),
            label: format!("Task {display_index}"),
        }
    }

    /// An unresolved link showing the trimmed original text.
    pub fn verbatim(text: &str) -> Self {
        Self {
            index: None,
            label: text.trim().to_string(),
        }
    }

    /// Whether this link has a navigation target.
    pub fn is_resolved(&self) -> bool {
        self.index.is_some()
    }
}

/// Per-task completion state. The transition is one-way.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub enum CompletionState {
    #[default]
    Active,
    Completed {
        completed_at: DateTime<Utc>,
    },
}

impl CompletionState {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
