//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Every method runs exactly
//! one statement with bound parameters.

pub mod actor_repo;
pub mod category_repo;
pub mod film_repo;

pub use actor_repo::ActorRepo;
pub use category_repo::CategoryRepo;
pub use film_repo::FilmRepo;
