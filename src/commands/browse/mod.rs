//! `kex browse` command - interactive terminal browser
//!
//! Hosts the topic selector next to keyword and sentiment fields and a
//! result list. Store calls run on worker threads; their results are
//! applied on the UI thread through the session's generation guard.

pub mod app;
pub mod ui;
pub mod worker;

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::debug;

use crate::commands::dispatch::CommandContext;
use kex_core::error::Result;
use kex_core::query::SearchFilter;
use kex_core::store::RecordStore;

use self::app::App;
use self::worker::{Worker, WorkerMessage};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Source of terminal input events
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads events from the real terminal
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Execute the browse command
pub fn execute(ctx: &CommandContext, initial: SearchFilter) -> Result<()> {
    let store: Arc<dyn RecordStore> = Arc::new(ctx.store());
    let (tx, rx) = mpsc::channel();
    let worker = Worker::new(store, tx);
    let mut app = App::new(ctx.policy(), &initial);

    let mut terminal = enter_terminal()?;
    let result = run(&mut terminal, &mut app, &worker, &rx, &mut TerminalEvents);
    let restored = leave_terminal(&mut terminal);

    result.and(restored)
}

/// Drive the browser until the user quits.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    worker: &Worker,
    rx: &Receiver<WorkerMessage>,
    events: &mut dyn EventSource,
) -> Result<()> {
    worker.dispatch(app.start());

    loop {
        while let Ok(message) = rx.try_recv() {
            let follow_up = app.apply(message);
            worker.dispatch(follow_up);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit() {
            debug!("browse_quit");
            return Ok(());
        }

        if let Some(event) = events.poll(POLL_INTERVAL)? {
            let requests = app.handle_event(event);
            worker.dispatch(requests);
        }
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(
        || {
            let mut stdout = io::stdout();
            crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        abandon_terminal,
    )
}

/// Run `setup`; when it fails, call `undo` before reporting the error.
fn undo_on_error<T>(setup: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().map_err(|err| {
        undo();
        err.into()
    })
}

/// Best-effort exit from a half-initialized terminal.
fn abandon_terminal() {
    // The setup error is the one reported; these are ignored.
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}

fn leave_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
