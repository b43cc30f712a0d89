use crate::plan::index::HeadingIndex;
use crate::plan::types::DependencyLink;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern compiles"));

/// Resolve a task's free-text dependency description against the heading
/// index, producing zero or more links.
///
/// Strategies apply in order and the first one that produces output wins:
///
/// 1. Absent, empty, or case-insensitive "none" text resolves to no links.
/// 2. For every index key (in insertion order), emit a link when the
///    lower-cased text contains the key as a substring, or contains the
///    literal "task {n}" for that key's index. All matches are kept and
///    duplicates are not removed. Matching is substring containment with no
///    word-boundary anchoring; a heading inside an unrelated longer word
///    counts as a match.
/// 3. If no key matched, extract maximal digit runs from the raw text and
///    emit a link for each number within 1..=index.len(). Out-of-range
///    numbers are dropped silently.
/// 4. If nothing matched and the trimmed text is non-empty, emit a single
///    unresolved link carrying the text verbatim.
///
/// The operation is total: it never signals an error.
pub fn resolve(dep_text: Option<&str>, index: &HeadingIndex) -> Vec<DependencyLink> {
    let Some(raw) = dep_text else {
        return Vec::new();
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    let lowered = raw.to_lowercase();
    let mut links = Vec::new();

    for (key, display_index) in index.iter() {
        if lowered.contains(key) || lowered.contains(&format!("task {display_index}")) {
            links.push(DependencyLink::resolved(display_index));
        }
    }

    if links.is_empty() {
        for run in DIGIT_RUNS.find_iter(raw) {
            if let Ok(number) = run.as_str().parse::<usize>()
                && (1..=index.len()).contains(&number)
            {
                links.push(DependencyLink::resolved(number));
            }
        }
    }

    if links.is_empty() && !raw.trim().is_empty() {
        links.push(DependencyLink::verbatim(raw));
    }

    links
}
