//! Routing from parsed subcommands to their implementations

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{analyze, browse, compose, config, delete, search, topics};
use kex_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let default_limit = ctx.config().default_limit;
        match self {
            Commands::Search(args) => {
                let filter = args.filter.to_filter(default_limit);
                search::execute(ctx, &ctx.store(), &filter, &args.expand, args.expand_all)
            }
            Commands::Compose(args) => compose::execute(ctx.cli, &args.to_filter(default_limit)),
            Commands::Topics(args) => {
                topics::execute(ctx.cli, &ctx.store(), args.term.as_deref(), &args.exclude)
            }
            Commands::Delete(args) => {
                let filter = args.filter.to_filter(default_limit);
                delete::execute(ctx, &ctx.store(), &args.id, &filter)
            }
            Commands::Analyze(args) => analyze::execute(ctx.cli, &ctx.store(), args.text.as_deref()),
            Commands::Browse(args) => browse::execute(ctx, args.to_filter(default_limit)),
            Commands::Config => config::execute(ctx.cli, ctx.resolved),
        }
    }
}
