//! Sort, direction and paging parameters shared by the search endpoints.
//!
//! Every value a caller can supply here is checked against a fixed
//! allow-list before any SQL is assembled. Comparison is exact value
//! equality: `"Title"` is not `"title"`, `"ASC"` is not `"asc"`.

use crate::error::CoreError;
use crate::results::MoviesResult;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page size used when the caller omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// The only page sizes a caller may request.
pub const PAGE_LIMIT_TIERS: [i64; 4] = [10, 25, 50, 100];

/// Check a caller-supplied page size against [`PAGE_LIMIT_TIERS`].
///
/// The raw query-string text is taken so that values which are not even
/// integers (`abc`, an empty value, digits beyond `i64`) fail the same way
/// as an integer outside the tiers.
pub fn resolve_limit(limit: Option<&str>) -> Result<i64, CoreError> {
    let Some(raw) = limit else {
        return Ok(DEFAULT_PAGE_LIMIT);
    };
    match raw.parse::<i64>() {
        Ok(limit) if PAGE_LIMIT_TIERS.contains(&limit) => Ok(limit),
        _ => Err(MoviesResult::InvalidLimit.into_error()),
    }
}

/// Row offset of a 1-based page.
///
/// No page and page 1 both start at offset 0. Unparsable pages, pages below
/// 1, and pages whose offset does not fit an `i64` are rejected.
pub fn page_offset(page: Option<&str>, limit: i64) -> Result<i64, CoreError> {
    let Some(raw) = page else {
        return Ok(0);
    };
    let page: i64 = raw
        .parse()
        .map_err(|_| MoviesResult::InvalidPage.into_error())?;
    if page < 1 {
        return Err(MoviesResult::InvalidPage.into_error());
    }
    (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| MoviesResult::InvalidPage.into_error())
}

/// A validated `LIMIT` / `OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub limit: i64,
    pub offset: i64,
}

impl Paging {
    pub fn resolve(limit: Option<&str>, page: Option<&str>) -> Result<Self, CoreError> {
        let limit = resolve_limit(limit)?;
        let offset = page_offset(page, limit)?;
        Ok(Self { limit, offset })
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(MoviesResult::InvalidDirection.into_error()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A closed set of sortable fields for one entity.
pub trait SortField: Copy + Sized + 'static {
    /// Wire name to field. The first entry is the default sort.
    const ALLOWED: &'static [(&'static str, Self)];

    fn parse(value: &str) -> Result<Self, CoreError> {
        Self::ALLOWED
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, field)| *field)
            .ok_or_else(|| MoviesResult::InvalidOrderBy.into_error())
    }

    fn default_field() -> Self {
        Self::ALLOWED[0].1
    }

    fn as_str(self) -> &'static str;
}

/// Sortable movie columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieSortField {
    Title,
    Rating,
    Year,
}

impl SortField for MovieSortField {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("title", MovieSortField::Title),
        ("rating", MovieSortField::Rating),
        ("year", MovieSortField::Year),
    ];

    fn as_str(self) -> &'static str {
        match self {
            MovieSortField::Title => "title",
            MovieSortField::Rating => "rating",
            MovieSortField::Year => "year",
        }
    }
}

/// Sortable person columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSortField {
    Name,
    Popularity,
    Birthday,
}

impl SortField for PersonSortField {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("name", PersonSortField::Name),
        ("popularity", PersonSortField::Popularity),
        ("birthday", PersonSortField::Birthday),
    ];

    fn as_str(self) -> &'static str {
        match self {
            PersonSortField::Name => "name",
            PersonSortField::Popularity => "popularity",
            PersonSortField::Birthday => "birthday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> Sort<F> {
    /// Resolve `orderBy` then `direction`; the first invalid one wins.
    pub fn resolve(order_by: Option<&str>, direction: Option<&str>) -> Result<Self, CoreError> {
        let field = order_by.map(F::parse).transpose()?.unwrap_or_else(F::default_field);
        let direction = direction
            .map(SortDirection::parse)
            .transpose()?
            .unwrap_or_default();
        Ok(Self { field, direction })
    }
}

/// Validated sort and page of one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing<F> {
    pub sort: Sort<F>,
    pub paging: Paging,
}

impl<F: SortField> Listing<F> {
    /// Validate in fixed order: orderBy, direction, limit, page.
    pub fn resolve(
        order_by: Option<&str>,
        direction: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> Result<Self, CoreError> {
        let sort = Sort::resolve(order_by, direction)?;
        let paging = Paging::resolve(limit, page)?;
        Ok(Self { sort, paging })
    }
}

// ---------------------------------------------------------------------------
// Text filters
// ---------------------------------------------------------------------------

/// `LIKE` pattern matching `value` anywhere in the column.
///
/// The value is not escaped: `%` and `_` typed by the caller keep their
/// wildcard meaning.
pub fn contains_pattern(value: &str) -> String {
    format!("%{value}%")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
