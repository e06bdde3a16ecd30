//! Entity structs and query-parameter DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs whose field names already match
//!   the wire casing, so no renaming happens after a row is decoded
//! - `Deserialize` parameter bags for the matching search endpoints

pub mod genre;
pub mod movie;
pub mod person;
