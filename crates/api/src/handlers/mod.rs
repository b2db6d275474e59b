//! Request handlers.
//!
//! Each handler runs exactly one repository query from `sakila_db` against
//! the shared pool and returns the rows as JSON. Failures map to
//! [`AppError`](crate::error::AppError).

pub mod actors;
pub mod categories;
pub mod films;
