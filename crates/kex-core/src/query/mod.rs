//! Search filters and their canonical query representation

pub mod compose;
pub mod filter;

pub use compose::{compose, decode_topics, QueryField, QueryPairs, TOPIC_DELIMITER};
pub use filter::SearchFilter;
