//! `kex delete` command - remove an analysis and refresh the listing
//!
//! The list shown afterwards is always re-fetched from the store with the
//! given filter; it is never edited locally.

use std::time::Instant;

use tracing::info;

use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::search::format::Listing;
use crate::commands::search::render;
use kex_core::bail_usage;
use kex_core::error::Result;
use kex_core::query::SearchFilter;
use kex_core::session::SearchSession;
use kex_core::store::RecordStore;

/// Execute the delete command
pub fn execute(
    ctx: &CommandContext,
    store: &dyn RecordStore,
    id: &str,
    filter: &SearchFilter,
) -> Result<()> {
    let start = Instant::now();
    let id = id.trim();
    if id.is_empty() {
        bail_usage!("analysis id must not be empty");
    }

    let mut session = SearchSession::new(ctx.policy());
    session.remember_query(filter);
    session.delete_with(store, id)?;
    info!(id, remaining = session.results().len(), "analysis_deleted");

    trace_command!(ctx.cli, start, "delete");

    render(ctx.cli, &Listing::new("delete", &session).with_deleted(id))
}
