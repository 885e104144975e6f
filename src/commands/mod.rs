//! Command implementations for kex

pub mod analyze;
pub mod browse;
pub mod compose;
pub mod config;
pub mod delete;
pub mod dispatch;
pub mod search;
pub mod topics;
