//! Caller roles and the record visibility they unlock.
//!
//! Role names are issued by the identity service and compared verbatim.

use std::collections::BTreeSet;

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_EMPLOYEE: &str = "EMPLOYEE";

/// Roles allowed to see hidden movies.
pub const ELEVATED_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EMPLOYEE];

/// Whether hidden records take part in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Hidden records are returned alongside public ones.
    IncludeHidden,
    /// Only rows with `hidden = FALSE` are returned.
    PublicOnly,
}

impl Visibility {
    pub fn shows_hidden(self) -> bool {
        matches!(self, Visibility::IncludeHidden)
    }
}

/// Verified caller identity as handed over by the authentication layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub roles: BTreeSet<String>,
}

impl AuthContext {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Derive the per-request visibility flag.
    pub fn visibility(&self) -> Visibility {
        if ELEVATED_ROLES.iter().any(|role| self.has_role(role)) {
            Visibility::IncludeHidden
        } else {
            Visibility::PublicOnly
        }
    }
}
