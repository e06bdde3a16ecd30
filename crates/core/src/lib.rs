//! Domain layer for the cinedex movie/person query service.
//!
//! Holds everything that does not touch I/O: the result-code catalog,
//! allow-listed sort and paging parameters, caller roles and the
//! visibility they unlock. Both the storage and HTTP crates depend on it.

pub mod error;
pub mod results;
pub mod roles;
pub mod search;
pub mod types;
