use std::num::NonZeroU32;

use kex_core::format::OutputFormat;
use kex_core::record::Sentiment;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse sentiment from string (case-insensitive)
pub fn parse_sentiment(s: &str) -> std::result::Result<Sentiment, String> {
    s.parse::<Sentiment>().map_err(|e| e.to_string())
}

/// Parse a positive result limit
pub fn parse_limit(s: &str) -> std::result::Result<NonZeroU32, String> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("limit must be a positive integer, got {:?}", s))?;
    NonZeroU32::new(value).ok_or_else(|| "limit must be at least 1".to_string())
}
