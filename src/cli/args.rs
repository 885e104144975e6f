//! Argument structs shared by several commands

use std::num::NonZeroU32;

use clap::{ArgAction, Args};

use super::parse::{parse_limit, parse_sentiment};
use kex_core::query::SearchFilter;
use kex_core::record::Sentiment;
use kex_core::topic::Topic;

/// Filter flags accepted by search, compose, delete and browse
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keyword matched against title, summary and text
    #[arg(long, short)]
    pub keyword: Option<String>,

    /// Sentiment: positive, neutral or negative
    #[arg(long, short, value_parser = parse_sentiment)]
    pub sentiment: Option<Sentiment>,

    /// Topic to match (can be specified multiple times)
    #[arg(long = "topic", short = 't', action = ArgAction::Append, value_name = "TOPIC")]
    pub topic: Vec<String>,

    /// Comma-separated topics to match
    #[arg(long, value_delimiter = ',', value_name = "TOPICS")]
    pub topics: Vec<String>,

    /// Maximum number of results
    #[arg(long, short = 'n', value_parser = parse_limit)]
    pub limit: Option<NonZeroU32>,
}

impl FilterArgs {
    /// Build the search filter, applying `default_limit` when no --limit was given.
    pub fn to_filter(&self, default_limit: Option<NonZeroU32>) -> SearchFilter {
        let topics = self
            .topic
            .iter()
            .chain(self.topics.iter())
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(Topic::from);

        SearchFilter::new()
            .with_keyword(self.keyword.as_deref())
            .with_sentiment(self.sentiment)
            .with_topics(topics)
            .with_limit(self.limit)
            .or_limit(default_limit)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Show a record in expanded form (can be specified multiple times)
    #[arg(long = "expand", action = ArgAction::Append, value_name = "ID")]
    pub expand: Vec<String>,

    /// Show every record in expanded form
    #[arg(long, conflicts_with = "expand")]
    pub expand_all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TopicsArgs {
    /// Only topics containing TERM (case-insensitive)
    #[arg(long = "match", value_name = "TERM")]
    pub term: Option<String>,

    /// Leave out a topic, as if already selected (can be specified multiple times)
    #[arg(long, action = ArgAction::Append, value_name = "TOPIC")]
    pub exclude: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Analysis id
    pub id: String,

    /// Filter used to re-fetch the list after deletion
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from stdin if omitted)
    #[arg(long)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kex_core::query::QueryField;

    #[test]
    fn test_topic_flags_merge_in_first_seen_order() {
        let args = FilterArgs {
            topic: vec!["ai".into(), " nlp ".into()],
            topics: vec!["ai".into(), "".into(), "finance".into()],
            ..FilterArgs::default()
        };
        let query = args.to_filter(None).compose();
        assert_eq!(query.get(QueryField::Topics), Some("ai,nlp,finance"));
    }

    #[test]
    fn test_default_limit_only_fills_gap() {
        let default = NonZeroU32::new(25);
        let args = FilterArgs::default();
        assert_eq!(args.to_filter(default).limit, default);

        let args = FilterArgs {
            limit: NonZeroU32::new(3),
            ..FilterArgs::default()
        };
        assert_eq!(args.to_filter(default).limit, NonZeroU32::new(3));
    }
}
