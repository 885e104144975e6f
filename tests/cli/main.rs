//! Integration tests for kex commands against a stub record store

mod analyze;
mod compose;
mod config;
mod delete;
mod search;
mod support;
mod topics;
