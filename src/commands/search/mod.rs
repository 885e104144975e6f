//! `kex search` command - query stored analyses
//!
//! - keyword, sentiment, topic and limit filters compose into one store query
//! - `--expand ID` / `--expand-all` render records in expanded form
//! - empty results print the empty-state message instead of a header

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use kex_core::error::Result;
use kex_core::query::SearchFilter;
use kex_core::session::SearchSession;
use kex_core::store::RecordStore;

use self::format::{output_human, output_json, output_records, Listing};

/// Execute the search command
pub fn execute(
    ctx: &CommandContext,
    store: &dyn RecordStore,
    filter: &SearchFilter,
    expand: &[String],
    expand_all: bool,
) -> Result<()> {
    let start = Instant::now();
    let cli = ctx.cli;

    if cli.verbose {
        debug!(query = %filter.compose().encode(), expand = expand.len(), expand_all, "search_params");
    }

    let mut session = SearchSession::new(ctx.policy());
    session.search_with(store, filter)?;
    apply_expansion(&mut session, expand, expand_all);

    trace_command!(cli, start, "search");

    render(cli, &Listing::new("search", &session))
}

/// Expand the requested records; ids not in the result set are ignored.
pub fn apply_expansion(session: &mut SearchSession, expand: &[String], expand_all: bool) {
    let targets: Vec<String> = session
        .results()
        .iter()
        .map(|r| r.id.clone())
        .filter(|id| expand_all || expand.contains(id))
        .collect();

    for id in expand.iter().filter(|id| !targets.contains(id)) {
        debug!(id = %id, "expand_target_not_in_results");
    }

    for id in targets {
        if !session.view().is_expanded(&id) {
            session.view_mut().toggle(&id);
        }
    }
}

/// Print a result listing in the selected format
pub fn render(cli: &Cli, listing: &Listing) -> Result<()> {
    output_by_format_result!(cli.format,
        json => output_json(listing),
        human => { output_human(cli, listing) },
        records => { output_records(listing) }
    )
}
