//! Result list presentation state
//!
//! Tracks which records are expanded and derives what each record shows.
//! This is semantic rendering only; layout and styling belong to callers.

use std::collections::HashSet;

use crate::config::ClientConfig;
use crate::record::AnalysisRecord;

/// Marker appended to a truncated summary
pub const ELLIPSIS: &str = "...";

/// Limits applied when rendering records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Character budget for a collapsed summary
    pub summary_budget: usize,
    /// Topics/keywords shown while collapsed
    pub collapsed_items: usize,
    /// Topics/keywords shown while expanded
    pub expanded_items: usize,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            summary_budget: 200,
            collapsed_items: 2,
            expanded_items: 3,
        }
    }
}

impl From<&ClientConfig> for RenderPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            summary_budget: config.summary_budget,
            collapsed_items: config.collapsed_items,
            expanded_items: config.expanded_items,
        }
    }
}

/// A capped list of tags with an overflow count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CappedList<'a> {
    pub shown: Vec<&'a str>,
    /// Count for the "+N more" indicator, collapsed form only
    pub more: Option<usize>,
}

impl CappedList<'_> {
    pub fn more_label(&self) -> Option<String> {
        self.more.map(|n| format!("+{} more", n))
    }
}

/// What one record displays in its current form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView<'a> {
    pub record: &'a AnalysisRecord,
    pub expanded: bool,
    pub summary: String,
    pub topics: CappedList<'a>,
    pub keywords: CappedList<'a>,
    /// Present only in expanded form
    pub original_text: Option<&'a str>,
}

/// Truncate to `budget` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate_text(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
    }
}

fn cap<'a, S: AsRef<str>>(items: &'a [S], limit: usize, show_more: bool) -> CappedList<'a> {
    let shown = items.iter().take(limit).map(|s| s.as_ref()).collect();
    let more = (show_more && items.len() > limit).then(|| items.len() - limit);
    CappedList { shown, more }
}

/// Expand/collapse state for a displayed result list
#[derive(Debug, Clone, Default)]
pub struct ResultListView {
    expanded: HashSet<String>,
    policy: RenderPolicy,
}

impl ResultListView {
    pub fn new(policy: RenderPolicy) -> Self {
        Self {
            expanded: HashSet::new(),
            policy,
        }
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Flip a record's expansion. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Forget expansion state for records no longer displayed.
    pub fn retain_present(&mut self, records: &[AnalysisRecord]) {
        let present: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        self.expanded.retain(|id| present.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn render<'a>(&self, record: &'a AnalysisRecord) -> RecordView<'a> {
        let expanded = self.is_expanded(&record.id);
        if expanded {
            RecordView {
                record,
                expanded,
                summary: record.summary.clone(),
                topics: cap(&record.topics, self.policy.expanded_items, false),
                keywords: cap(&record.keywords, self.policy.expanded_items, false),
                original_text: Some(&record.original_text),
            }
        } else {
            RecordView {
                record,
                expanded,
                summary: truncate_text(&record.summary, self.policy.summary_budget),
                topics: cap(&record.topics, self.policy.collapsed_items, true),
                keywords: cap(&record.keywords, self.policy.collapsed_items, true),
                original_text: None,
            }
        }
    }
}
