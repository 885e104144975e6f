//! Topic vocabulary, selection and candidate filtering
//!
//! - [`TopicCatalog`]: the full known vocabulary, loaded once per session
//! - [`SelectionSet`]: the user's chosen topics, insertion ordered
//! - [`candidates`]: catalog topics eligible for the picker dropdown

pub mod catalog;
pub mod filter;
pub mod selection;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::TopicCatalog;
pub use filter::{candidates, exact_match};
pub use selection::SelectionSet;

/// An opaque, case-preserving topic tag.
///
/// Equality is exact-string; filtering uses [`Topic::contains_folded`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Topic(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against an already lowercased needle.
    pub fn contains_folded(&self, folded_needle: &str) -> bool {
        self.0.to_lowercase().contains(folded_needle)
    }

    /// Case-insensitive full-string equality.
    pub fn eq_folded(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl Borrow<str> for Topic {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Topic {
    fn from(value: &str) -> Self {
        Topic(value.to_string())
    }
}

impl From<String> for Topic {
    fn from(value: String) -> Self {
        Topic(value)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
