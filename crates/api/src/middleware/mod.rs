//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the verified caller and its role-derived visibility.

pub mod auth;
