//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. Search methods run a
//! statement already validated and built by [`crate::query`].

pub mod movie_repo;
pub mod person_repo;

pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;
