use crate::plan::types::RankedTask;
use serde::{Deserialize, Serialize};

/// Insertion-ordered lookup from normalized heading text to display index.
///
/// Built once per render pass from the ranked list. Keys are lower-cased
/// headings (or the synthesized "task {n}" when a record has none). On a key
/// collision the later task's index overwrites the earlier value while the
/// key keeps its original position, so iteration order is always first-
/// insertion order and lookups are last-write-wins.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HeadingIndex {
    entries: Vec<(String, usize)>,
}

impl HeadingIndex {
    /// Build the index with a single forward pass over the ranked list.
    pub fn build(ranked: &[RankedTask]) -> Self {
        let mut index = Self::default();
        for task in ranked {
            index.insert(task.display_heading().to_lowercase(), task.display_index);
        }
        index
    }

    fn insert(&mut self, key: String, display_index: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = display_index;
        } else {
            self.entries.push((key, display_index));
        }
    }

    /// Look up a normalized heading.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, display_index)| *display_index)
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(key, display_index)| (key.as_str(), *display_index))
    }

    /// Number of distinct keys; also the upper bound for bare-number
    /// dependency references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
