//! Row models and request DTOs.
//!
//! Read models mirror the exact column list their query selects, so
//! handlers can serialize rows without reshaping them.

pub mod actor;
pub mod category;
pub mod film;
