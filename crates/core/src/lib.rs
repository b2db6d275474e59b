//! Database-free building blocks shared by the db and api crates.

pub mod error;
pub mod search;
pub mod types;
