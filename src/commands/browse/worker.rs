//! Background store calls for the browser
//!
//! Each request runs on its own thread and reports back over an mpsc
//! channel, so the UI thread never waits on the network.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use kex_core::error::Result;
use kex_core::record::AnalysisRecord;
use kex_core::session::QueryTicket;
use kex_core::store::RecordStore;
use kex_core::topic::TopicCatalog;
use kex_core::trace_time;

/// Work the browser asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadCatalog,
    Search(QueryTicket),
    Delete(String),
}

/// Completed work, delivered to the UI thread
#[derive(Debug)]
pub enum WorkerMessage {
    Catalog(TopicCatalog),
    Searched {
        generation: u64,
        response: Result<Vec<AnalysisRecord>>,
    },
    Deleted {
        id: String,
        response: Result<()>,
    },
}

pub struct Worker {
    store: Arc<dyn RecordStore>,
    tx: Sender<WorkerMessage>,
}

impl Worker {
    pub fn new(store: Arc<dyn RecordStore>, tx: Sender<WorkerMessage>) -> Self {
        Self { store, tx }
    }

    pub fn dispatch(&self, requests: Vec<Request>) {
        for request in requests {
            self.spawn(request);
        }
    }

    fn spawn(&self, request: Request) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let message = run_request(store.as_ref(), request);
            // A closed channel means the browser already exited.
            let _ = tx.send(message);
        });
    }
}

/// Perform one request synchronously.
pub fn run_request(store: &dyn RecordStore, request: Request) -> WorkerMessage {
    let start = Instant::now();
    match request {
        Request::LoadCatalog => {
            let catalog = TopicCatalog::load(store);
            trace_time!(start, "browse_catalog", topics = catalog.len());
            WorkerMessage::Catalog(catalog)
        }
        Request::Search(ticket) => {
            let response = store.list(&ticket.query);
            trace_time!(start, "browse_search", generation = ticket.generation);
            WorkerMessage::Searched {
                generation: ticket.generation,
                response,
            }
        }
        Request::Delete(id) => {
            let response = store.delete(&id);
            trace_time!(start, "browse_delete", ok = response.is_ok());
            WorkerMessage::Deleted { id, response }
        }
    }
}
