//! Interactive multi-value topic selector
//!
//! The selector is two independent values: a [`SelectionSet`] and a
//! [`SelectorPhase`] (plus the live search term). Every user interaction is a
//! [`SelectorEvent`]; [`TopicSelector::handle`] applies it and reports
//! whether the selection changed so the owning form can rebuild its query on
//! the next search. The selector itself never issues a query.

use tracing::debug;

use crate::topic::{candidates, exact_match, SelectionSet, Topic, TopicCatalog};

/// Whether the candidate dropdown is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
    #[default]
    Closed,
    Open,
}

/// A user interaction with the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Focus or click on the search input
    Focus,
    /// The open/close affordance was toggled
    ToggleAffordance,
    /// The search input text changed
    Edit(String),
    /// A candidate was chosen directly (pointer)
    Pick(Topic),
    /// Enter in the search input
    Confirm,
    /// Escape in the search input
    Cancel,
    /// Pointer action outside the selector boundary
    PointerOutside,
    /// A selected topic's remove control
    Remove(Topic),
    /// The clear-all control
    ClearAll,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    Unchanged,
    SelectionChanged,
}

impl SelectorOutcome {
    pub fn selection_changed(&self) -> bool {
        matches!(self, SelectorOutcome::SelectionChanged)
    }
}

/// What the dropdown shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown<'a> {
    Hidden,
    Candidates(Vec<&'a Topic>),
    /// Nothing to pick; carries the empty-state message
    Empty(String),
}

/// Topic picker state for one session
#[derive(Debug, Clone, Default)]
pub struct TopicSelector {
    catalog: TopicCatalog,
    selection: SelectionSet,
    phase: SelectorPhase,
    search_term: String,
}

impl TopicSelector {
    pub fn new(catalog: TopicCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Start from an existing selection.
    pub fn with_selection(mut self, selection: SelectionSet) -> Self {
        self.selection = selection;
        self
    }

    /// Install the catalog once it has been fetched.
    pub fn set_catalog(&mut self, catalog: TopicCatalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == SelectorPhase::Open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current candidates, regardless of phase.
    pub fn candidates(&self) -> Vec<&Topic> {
        candidates(&self.catalog, &self.selection, &self.search_term)
    }

    pub fn dropdown(&self) -> Dropdown<'_> {
        if !self.is_open() {
            return Dropdown::Hidden;
        }
        let found = self.candidates();
        if !found.is_empty() {
            Dropdown::Candidates(found)
        } else if self.search_term.is_empty() {
            Dropdown::Empty("No topics available".to_string())
        } else {
            Dropdown::Empty(format!("No topics found matching \"{}\"", self.search_term))
        }
    }

    /// Apply one interaction.
    pub fn handle(&mut self, event: SelectorEvent) -> SelectorOutcome {
        let before = self.phase;
        let outcome = match event {
            SelectorEvent::Focus => {
                self.phase = SelectorPhase::Open;
                SelectorOutcome::Unchanged
            }
            SelectorEvent::ToggleAffordance => {
                self.phase = match self.phase {
                    SelectorPhase::Closed => SelectorPhase::Open,
                    SelectorPhase::Open => SelectorPhase::Closed,
                };
                SelectorOutcome::Unchanged
            }
            SelectorEvent::Edit(term) => {
                self.search_term = term;
                self.phase = SelectorPhase::Open;
                SelectorOutcome::Unchanged
            }
            SelectorEvent::Pick(topic) => self.pick(topic),
            SelectorEvent::Confirm => self.confirm(),
            SelectorEvent::Cancel => {
                self.phase = SelectorPhase::Closed;
                self.search_term.clear();
                SelectorOutcome::Unchanged
            }
            SelectorEvent::PointerOutside => {
                self.phase = SelectorPhase::Closed;
                SelectorOutcome::Unchanged
            }
            SelectorEvent::Remove(topic) => {
                if self.selection.remove(topic.as_str()) {
                    SelectorOutcome::SelectionChanged
                } else {
                    SelectorOutcome::Unchanged
                }
            }
            SelectorEvent::ClearAll => {
                if self.selection.is_empty() {
                    SelectorOutcome::Unchanged
                } else {
                    self.selection.clear();
                    SelectorOutcome::SelectionChanged
                }
            }
        };

        if before != self.phase || outcome.selection_changed() {
            debug!(
                from = ?before,
                to = ?self.phase,
                selected = self.selection.len(),
                changed = outcome.selection_changed(),
                "selector_transition"
            );
        }
        outcome
    }

    /// Add `topic`; a completed pick closes the selector and resets the term.
    fn pick(&mut self, topic: Topic) -> SelectorOutcome {
        if !self.selection.insert(topic) {
            return SelectorOutcome::Unchanged;
        }
        self.search_term.clear();
        self.phase = SelectorPhase::Closed;
        SelectorOutcome::SelectionChanged
    }

    /// Enter: exact (case-insensitive) match wins, else the first candidate.
    fn confirm(&mut self) -> SelectorOutcome {
        if !self.is_open() || self.search_term.trim().is_empty() {
            return SelectorOutcome::Unchanged;
        }
        let choice = {
            let found = self.candidates();
            exact_match(&found, &self.search_term)
                .or_else(|| found.first().copied())
                .cloned()
        };
        match choice {
            Some(topic) => self.pick(topic),
            None => SelectorOutcome::Unchanged,
        }
    }
}
