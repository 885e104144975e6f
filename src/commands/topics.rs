//! `kex topics` command - list topic candidates
//!
//! Loads the vocabulary (an unreachable store yields an empty catalog) and
//! prints the candidates the interactive picker would offer for `--match`,
//! treating `--exclude` topics as already selected.

use crate::cli::Cli;
use crate::output_by_format_result;
use kex_core::error::Result;
use kex_core::records::escape_quotes;
use kex_core::selector::{Dropdown, SelectorEvent, TopicSelector};
use kex_core::store::RecordStore;
use kex_core::topic::{SelectionSet, Topic, TopicCatalog};

/// Execute the topics command
pub fn execute(
    cli: &Cli,
    store: &dyn RecordStore,
    term: Option<&str>,
    exclude: &[String],
) -> Result<()> {
    let catalog = TopicCatalog::load(store);
    let excluded: SelectionSet = exclude.iter().map(|t| Topic::from(t.as_str())).collect();

    let mut selector = TopicSelector::new(catalog).with_selection(excluded);
    selector.handle(SelectorEvent::Edit(term.unwrap_or_default().to_string()));

    output_by_format_result!(cli.format,
        json => output_json(&selector),
        human => { output_human(cli, &selector) },
        records => { output_records(&selector) }
    )
}

fn output_human(cli: &Cli, selector: &TopicSelector) {
    match selector.dropdown() {
        Dropdown::Candidates(topics) => {
            for topic in topics {
                println!("{}", topic);
            }
        }
        Dropdown::Empty(message) => {
            if !cli.quiet {
                println!("{}", message);
            }
        }
        Dropdown::Hidden => {}
    }
}

fn output_json(selector: &TopicSelector) -> Result<()> {
    let output = serde_json::json!({
        "match": selector.search_term(),
        "excluded": selector.selection().as_slice(),
        "catalog_size": selector.catalog().len(),
        "topics": selector.candidates(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(selector: &TopicSelector) {
    let candidates = selector.candidates();
    println!(
        "H kex=1 records=1 mode=topics match=\"{}\" catalog={} candidates={}",
        escape_quotes(selector.search_term()),
        selector.catalog().len(),
        candidates.len()
    );
    for topic in candidates {
        println!("T {}", topic);
    }
}
