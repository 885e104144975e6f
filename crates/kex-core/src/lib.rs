//! Kex Core Library
//!
//! Topic selection, filter composition and record-store access for the kex
//! text-analysis client.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod query;
pub mod record;
pub mod records;
pub mod selector;
pub mod session;
pub mod store;
pub mod topic;
pub mod view;
