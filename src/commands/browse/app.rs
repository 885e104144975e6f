//! Browser state and input handling
//!
//! `App` holds no I/O: terminal events and worker messages go in, and
//! [`Request`]s for the worker come out. Drawing lives in `ui`.

use std::num::NonZeroU32;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::worker::{Request, WorkerMessage};
use crate::commands::search::format::human::{found_header, NO_MATCHES};
use kex_core::query::SearchFilter;
use kex_core::record::Sentiment;
use kex_core::selector::{SelectorEvent, SelectorOutcome, TopicSelector};
use kex_core::session::{DeleteOutcome, SearchOutcome, SearchSession};
use kex_core::topic::Topic;
use kex_core::view::RenderPolicy;

const SENTIMENT_CHOICES: [Option<Sentiment>; 4] = [
    None,
    Some(Sentiment::Positive),
    Some(Sentiment::Neutral),
    Some(Sentiment::Negative),
];

/// Form element receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyword,
    Sentiment,
    Topics,
    Results,
}

impl Focus {
    const RING: [Focus; 4] = [Focus::Keyword, Focus::Sentiment, Focus::Topics, Focus::Results];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

/// What the status line reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Searching,
    Found(usize),
    Deleting(String),
    Failed(String),
    FiltersChanged,
}

/// Screen regions used for pointer hit-testing, recorded on each draw
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    pub selector: Rect,
    /// Candidate rows (inside the border) while the dropdown lists topics
    pub dropdown: Option<Rect>,
    /// Index of the candidate drawn on the first dropdown row
    pub dropdown_offset: usize,
}

pub struct App {
    pub keyword: String,
    pub sentiment: Option<Sentiment>,
    pub selector: TopicSelector,
    pub session: SearchSession,
    pub focus: Focus,
    /// Highlighted dropdown candidate
    pub highlighted: usize,
    /// Highlighted selected-topic chip
    pub chip: Option<usize>,
    /// Highlighted result
    pub cursor: usize,
    pub status: Status,
    /// One-shot message, cleared by the next key press
    pub notice: Option<String>,
    pub hit: HitAreas,
    limit: Option<NonZeroU32>,
    should_quit: bool,
}

impl App {
    pub fn new(policy: RenderPolicy, initial: &SearchFilter) -> Self {
        Self {
            keyword: initial.keyword.clone().unwrap_or_default(),
            sentiment: initial.sentiment,
            selector: TopicSelector::default().with_selection(initial.topics.clone()),
            session: SearchSession::new(policy),
            focus: Focus::Keyword,
            highlighted: 0,
            chip: None,
            cursor: 0,
            status: Status::Ready,
            notice: None,
            hit: HitAreas::default(),
            limit: initial.limit,
            should_quit: false,
        }
    }

    /// Work to start with: load the catalog and run the initial search.
    pub fn start(&mut self) -> Vec<Request> {
        let mut requests = vec![Request::LoadCatalog];
        requests.extend(self.search());
        requests
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The filter the form currently describes
    pub fn filter(&self) -> SearchFilter {
        SearchFilter::new()
            .with_keyword(Some(self.keyword.as_str()))
            .with_sentiment(self.sentiment)
            .with_selection(self.selector.selection().clone())
            .with_limit(self.limit)
    }

    pub fn search(&mut self) -> Vec<Request> {
        let ticket = self.session.begin_search(&self.filter());
        self.status = Status::Searching;
        vec![Request::Search(ticket)]
    }

    pub fn status_line(&self) -> String {
        let base = match &self.status {
            Status::Ready => "Press F5 to search".to_string(),
            Status::Searching => "Searching...".to_string(),
            Status::Found(0) => NO_MATCHES.to_string(),
            Status::Found(count) => found_header(*count),
            Status::Deleting(id) => format!("Deleting {}...", id),
            Status::Failed(message) => message.clone(),
            Status::FiltersChanged => "Filters changed; press F5 to search".to_string(),
        };
        match &self.notice {
            Some(notice) => format!("{} | {}", notice, base),
            None => base,
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Vec<Request> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.notice = None;
                self.handle_key(key)
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Request> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Vec::new();
            }
            KeyCode::Char('s') if ctrl => return self.search(),
            KeyCode::F(5) => return self.search(),
            KeyCode::Char('l') if ctrl => {
                self.clear_form();
                return Vec::new();
            }
            KeyCode::Tab => {
                self.move_focus(self.focus.next());
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.move_focus(self.focus.prev());
                return Vec::new();
            }
            _ => {}
        }

        match self.focus {
            Focus::Keyword => self.keyword_key(key, ctrl),
            Focus::Sentiment => self.sentiment_key(key),
            Focus::Topics => {
                self.topics_key(key, ctrl);
                Vec::new()
            }
            Focus::Results => self.results_key(key, ctrl),
        }
    }

    fn keyword_key(&mut self, key: KeyEvent, ctrl: bool) -> Vec<Request> {
        match key.code {
            KeyCode::Char(c) if !ctrl => self.keyword.push(c),
            KeyCode::Backspace => {
                self.keyword.pop();
            }
            KeyCode::Enter => return self.search(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
        Vec::new()
    }

    fn sentiment_key(&mut self, key: KeyEvent) -> Vec<Request> {
        let current = SENTIMENT_CHOICES
            .iter()
            .position(|s| *s == self.sentiment)
            .unwrap_or(0);
        let n = SENTIMENT_CHOICES.len();
        match key.code {
            KeyCode::Right => self.sentiment = SENTIMENT_CHOICES[(current + 1) % n],
            KeyCode::Left => self.sentiment = SENTIMENT_CHOICES[(current + n - 1) % n],
            KeyCode::Enter => return self.search(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
        Vec::new()
    }

    fn topics_key(&mut self, key: KeyEvent, ctrl: bool) {
        let event = match key.code {
            KeyCode::Char('p') if ctrl => self.highlighted_candidate().map(SelectorEvent::Pick),
            KeyCode::Char('x') if ctrl => Some(SelectorEvent::ClearAll),
            KeyCode::Char(c) if !ctrl => {
                let mut term = self.selector.search_term().to_string();
                term.push(c);
                Some(SelectorEvent::Edit(term))
            }
            KeyCode::Backspace => {
                let mut term = self.selector.search_term().to_string();
                term.pop();
                Some(SelectorEvent::Edit(term))
            }
            KeyCode::Enter => Some(SelectorEvent::Confirm),
            KeyCode::Esc => {
                if self.selector.is_open() || !self.selector.search_term().is_empty() {
                    Some(SelectorEvent::Cancel)
                } else {
                    self.should_quit = true;
                    None
                }
            }
            KeyCode::F(2) => Some(SelectorEvent::ToggleAffordance),
            KeyCode::Down if !self.selector.is_open() => Some(SelectorEvent::Focus),
            KeyCode::Down => {
                self.move_highlight(true);
                None
            }
            KeyCode::Up => {
                self.move_highlight(false);
                None
            }
            KeyCode::Left => {
                self.move_chip(false);
                None
            }
            KeyCode::Right => {
                self.move_chip(true);
                None
            }
            KeyCode::Delete => self
                .chip
                .and_then(|i| self.selector.selection().get(i).cloned())
                .map(SelectorEvent::Remove),
            _ => None,
        };

        if let Some(event) = event {
            self.apply_selector(event);
        }
    }

    fn results_key(&mut self, key: KeyEvent, ctrl: bool) -> Vec<Request> {
        let count = self.session.results().len();
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down if count > 0 => self.cursor = (self.cursor + 1).min(count - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.current_id() {
                    self.session.view_mut().toggle(&id);
                }
            }
            KeyCode::Char('d') if !ctrl => {
                if let Some(id) = self.current_id() {
                    debug!(id = %id, "delete_requested");
                    self.status = Status::Deleting(id.clone());
                    return vec![Request::Delete(id)];
                }
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<Request> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let at = Position::new(mouse.column, mouse.row);

        if let Some(area) = self.hit.dropdown.filter(|_| self.selector.is_open()) {
            if area.contains(at) {
                let row = self.hit.dropdown_offset + usize::from(at.y - area.y);
                let picked = self.selector.candidates().get(row).map(|t| (*t).clone());
                if let Some(topic) = picked {
                    self.apply_selector(SelectorEvent::Pick(topic));
                }
                return Vec::new();
            }
        }

        if self.hit.selector.contains(at) {
            self.focus = Focus::Topics;
            self.apply_selector(SelectorEvent::Focus);
        } else if self.selector.is_open() {
            self.apply_selector(SelectorEvent::PointerOutside);
        }
        Vec::new()
    }

    /// Apply a worker result; may schedule follow-up work.
    pub fn apply(&mut self, message: WorkerMessage) -> Vec<Request> {
        match message {
            WorkerMessage::Catalog(catalog) => {
                self.selector.set_catalog(catalog);
                self.highlighted = 0;
                Vec::new()
            }
            WorkerMessage::Searched {
                generation,
                response,
            } => {
                match self.session.complete_search(generation, response) {
                    SearchOutcome::Applied { count } => {
                        self.status = Status::Found(count);
                        self.cursor = self.cursor.min(count.saturating_sub(1));
                    }
                    SearchOutcome::Stale => {}
                    SearchOutcome::Failed { message } => self.status = Status::Failed(message),
                }
                Vec::new()
            }
            WorkerMessage::Deleted { id, response } => {
                match self.session.complete_delete(&id, response) {
                    DeleteOutcome::Deleted { refresh } => {
                        self.notice = Some("Analysis deleted successfully".to_string());
                        self.status = Status::Searching;
                        vec![Request::Search(refresh)]
                    }
                    DeleteOutcome::Failed { message } => {
                        self.status = Status::Failed(message);
                        Vec::new()
                    }
                }
            }
        }
    }

    fn move_focus(&mut self, to: Focus) {
        if self.focus == Focus::Topics && to != Focus::Topics {
            self.apply_selector(SelectorEvent::PointerOutside);
        }
        if to == Focus::Topics && self.focus != Focus::Topics {
            self.apply_selector(SelectorEvent::Focus);
        }
        self.focus = to;
    }

    fn apply_selector(&mut self, event: SelectorEvent) -> SelectorOutcome {
        let resets_highlight = matches!(event, SelectorEvent::Edit(_));
        let outcome = self.selector.handle(event);
        if resets_highlight || !self.selector.is_open() {
            self.highlighted = 0;
        }
        if outcome.selection_changed() {
            self.status = Status::FiltersChanged;
            self.clamp_chip();
        }
        outcome
    }

    /// Reset every filter and drop the results.
    fn clear_form(&mut self) {
        self.keyword.clear();
        self.sentiment = None;
        self.apply_selector(SelectorEvent::Cancel);
        self.apply_selector(SelectorEvent::ClearAll);
        self.session.clear();
        // A delete finishing later refreshes with the cleared form.
        self.session.remember_query(&self.filter());
        self.cursor = 0;
        self.chip = None;
        self.status = Status::Ready;
    }

    fn highlighted_candidate(&self) -> Option<Topic> {
        if !self.selector.is_open() {
            return None;
        }
        self.selector
            .candidates()
            .get(self.highlighted)
            .map(|t| (*t).clone())
    }

    fn move_highlight(&mut self, forward: bool) {
        let count = self.selector.candidates().len();
        if count == 0 {
            self.highlighted = 0;
        } else if forward {
            self.highlighted = (self.highlighted + 1).min(count - 1);
        } else {
            self.highlighted = self.highlighted.saturating_sub(1);
        }
    }

    fn move_chip(&mut self, forward: bool) {
        let count = self.selector.selection().len();
        if count == 0 {
            self.chip = None;
            return;
        }
        self.chip = Some(match (self.chip, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1).min(count - 1),
            (Some(i), false) => i.saturating_sub(1),
        });
    }

    fn clamp_chip(&mut self) {
        let count = self.selector.selection().len();
        self.chip = match self.chip {
            _ if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    fn current_id(&self) -> Option<String> {
        self.session
            .results()
            .get(self.cursor)
            .map(|r| r.id.clone())
    }
}
