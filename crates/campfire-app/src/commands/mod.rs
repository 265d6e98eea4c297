//! User-facing operations, one module per domain.
//!
//! Commands talk to the store, convert `NotFound` into an error notice at
//! the call site, and never update state optimistically: results are only
//! surfaced after the store confirms.

pub mod assignments;
pub mod dashboard;
pub mod files;
pub mod messages;
pub mod projects;
pub mod team;
pub mod todos;
