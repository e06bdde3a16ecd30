//! SQL statement builder for the read endpoints.
//!
//! Statements are assembled from fixed clause fragments. Caller-supplied
//! filter values always travel as bind parameters (`$1`, `$2`, ...). The only
//! text spliced into the SQL is column names and sort keywords picked from
//! closed enums, plus `LIMIT`/`OFFSET` integers that already passed the
//! paging allow-list.

pub mod movie;
pub mod person;

use std::fmt;

use cinedex_core::roles::Visibility;
use cinedex_core::search::{Paging, SortDirection};
use cinedex_core::types::Date;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Date(Date),
}

/// A finished statement: SQL text plus its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl BuiltQuery {
    /// Prepare a typed sqlx query with every parameter bound in order.
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        let mut query = sqlx::query_as::<_, O>(&self.sql);
        for param in &self.params {
            query = match param {
                SqlValue::Text(s) => query.bind(s.as_str()),
                SqlValue::Integer(i) => query.bind(*i),
                SqlValue::Date(d) => query.bind(*d),
            };
        }
        query
    }
}

impl fmt::Display for BuiltQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Accumulates the clauses of one `SELECT`.
///
/// Clauses may be added in any order; [`SelectBuilder::build`] always renders
/// them as `SELECT .. FROM .. JOIN .. WHERE .. ORDER BY .. LIMIT .. OFFSET ..`.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    distinct: bool,
    columns: &'static str,
    from: &'static str,
    joins: Vec<&'static str>,
    predicates: Vec<String>,
    params: Vec<SqlValue>,
    order_by: Vec<String>,
    paging: Option<Paging>,
}

impl SelectBuilder {
    pub fn new(columns: &'static str, from: &'static str) -> Self {
        Self {
            distinct: false,
            columns,
            from,
            joins: Vec::new(),
            predicates: Vec::new(),
            params: Vec::new(),
            order_by: Vec::new(),
            paging: None,
        }
    }

    /// Collapse duplicate rows produced by one-to-many joins.
    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Add a join clause. Adding the same clause twice is a no-op.
    pub fn join(&mut self, join: &'static str) -> &mut Self {
        if !self.has_join(join) {
            self.joins.push(join);
        }
        self
    }

    pub fn has_join(&self, join: &str) -> bool {
        self.joins.iter().any(|j| *j == join)
    }

    /// AND a predicate comparing `lhs` to a freshly bound parameter.
    pub fn bind_predicate(
        &mut self,
        lhs: &'static str,
        operator: &'static str,
        value: SqlValue,
    ) -> &mut Self {
        self.params.push(value);
        let placeholder = self.params.len();
        self.predicates.push(format!("{lhs} {operator} ${placeholder}"));
        self
    }

    /// AND a predicate that takes no parameters.
    pub fn predicate(&mut self, predicate: &'static str) -> &mut Self {
        self.predicates.push(predicate.to_string());
        self
    }

    /// Exclude hidden movies (alias `m`) unless the caller may see them.
    pub fn restrict_visibility(&mut self, visibility: Visibility) -> &mut Self {
        if !visibility.shows_hidden() {
            self.predicate(VISIBLE_MOVIES);
        }
        self
    }

    pub fn order_by(&mut self, column: &'static str, direction: SortDirection) -> &mut Self {
        let keyword = match direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };
        self.order_by.push(format!("{column} {keyword}"));
        self
    }

    /// Append a literal sort term such as `p.popularity DESC NULLS LAST`.
    pub fn order_by_raw(&mut self, term: &'static str) -> &mut Self {
        self.order_by.push(term.to_string());
        self
    }

    pub fn paginate(&mut self, paging: Paging) -> &mut Self {
        self.paging = Some(paging);
        self
    }

    pub fn build(&self) -> BuiltQuery {
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(self.columns);
        sql.push_str(" FROM ");
        sql.push_str(self.from);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }

        if let Some(paging) = self.paging {
            sql.push_str(&format!(
                " LIMIT {} OFFSET {}",
                paging.limit, paging.offset
            ));
        }

        BuiltQuery {
            sql,
            params: self.params.clone(),
        }
    }
}

/// Visibility predicate on the movie table aliased `m`.
pub const VISIBLE_MOVIES: &str = "m.hidden = FALSE";
