//! Person statements: search and detail.

use cinedex_core::error::CoreError;
use cinedex_core::roles::Visibility;
use cinedex_core::search::{contains_pattern, Listing, PersonSortField};
use cinedex_core::types::{Date, DbId};

use super::{BuiltQuery, SelectBuilder, SqlValue};
use crate::models::person::PersonSearchParams;

const PERSON_COLUMNS: &str = "\
    p.id, p.name, p.birthday, p.biography, p.birthplace, \
    p.popularity, p.profile_path";

/// Reaches the movies a person is cast in. Only present with a title filter.
const MOVIE_JOIN: &str =
    "JOIN movie_person mp ON mp.person_id = p.id JOIN movie m ON m.id = mp.movie_id";

fn sort_column(field: PersonSortField) -> &'static str {
    match field {
        PersonSortField::Name => "p.name",
        PersonSortField::Popularity => "p.popularity",
        PersonSortField::Birthday => "p.birthday",
    }
}

/// One optional person-search filter.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonFilter {
    Name(String),
    Birthday(Date),
    MovieTitle(String),
}

impl PersonFilter {
    pub fn from_params(params: &PersonSearchParams) -> Vec<PersonFilter> {
        let mut filters = Vec::new();
        if let Some(name) = &params.name {
            filters.push(PersonFilter::Name(name.clone()));
        }
        if let Some(birthday) = params.birthday {
            filters.push(PersonFilter::Birthday(birthday));
        }
        if let Some(title) = &params.movie_title {
            filters.push(PersonFilter::MovieTitle(title.clone()));
        }
        filters
    }

    pub fn apply(&self, select: &mut SelectBuilder) {
        match self {
            PersonFilter::Name(name) => {
                select.bind_predicate("p.name", "LIKE", SqlValue::Text(contains_pattern(name)));
            }
            PersonFilter::Birthday(birthday) => {
                select.bind_predicate("p.birthday", "=", SqlValue::Date(*birthday));
            }
            PersonFilter::MovieTitle(title) => {
                select.join(MOVIE_JOIN).bind_predicate(
                    "m.title",
                    "LIKE",
                    SqlValue::Text(contains_pattern(title)),
                );
            }
        }
    }
}

/// `GET /person/search`.
///
/// Persons carry no hidden flag. Visibility only narrows the movies reached
/// through the title filter, so a person cast solely in hidden movies does
/// not match a public caller's title search.
pub fn search(
    params: &PersonSearchParams,
    visibility: Visibility,
) -> Result<BuiltQuery, CoreError> {
    let listing = Listing::<PersonSortField>::resolve(
        params.order_by.as_deref(),
        params.direction.as_deref(),
        params.limit.as_deref(),
        params.page.as_deref(),
    )?;

    let mut select = SelectBuilder::new(PERSON_COLUMNS, "person p");
    select.distinct();
    for filter in PersonFilter::from_params(params) {
        filter.apply(&mut select);
    }
    if select.has_join(MOVIE_JOIN) {
        select.restrict_visibility(visibility);
    }
    select
        .order_by(sort_column(listing.sort.field), listing.sort.direction)
        .order_by("p.id", Default::default())
        .paginate(listing.paging);

    Ok(select.build())
}

/// `GET /person/{personId}`.
pub fn detail(person_id: DbId) -> BuiltQuery {
    let mut select = SelectBuilder::new(PERSON_COLUMNS, "person p");
    select.bind_predicate("p.id", "=", SqlValue::Integer(person_id));
    select.build()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use cinedex_core::results::MoviesResult;

    use super::*;

    const PERSON_FROM: &str = "SELECT DISTINCT p.id, p.name, p.birthday, p.biography, \
        p.birthplace, p.popularity, p.profile_path FROM person p";

    #[test]
    fn default_search_has_no_where() {
        let query = search(&PersonSearchParams::default(), Visibility::PublicOnly).unwrap();
        assert_eq!(
            query.sql,
            format!("{PERSON_FROM} ORDER BY p.name ASC, p.id ASC LIMIT 10 OFFSET 0")
        );
        assert!(query.params.is_empty());
    }

    #[test]
    fn name_and_birthday_skip_movie_join() {
        let birthday = Date::from_ymd_opt(1964, 9, 2).unwrap();
        let query = search(
            &PersonSearchParams {
                name: Some("Keanu".into()),
                birthday: Some(birthday),
                ..Default::default()
            },
            Visibility::PublicOnly,
        )
        .unwrap();
        assert_eq!(
            query.sql,
            format!(
                "{PERSON_FROM} WHERE p.name LIKE $1 AND p.birthday = $2 \
                 ORDER BY p.name ASC, p.id ASC LIMIT 10 OFFSET 0"
            )
        );
        assert_eq!(
            query.params,
            vec![SqlValue::Text("%Keanu%".into()), SqlValue::Date(birthday)]
        );
    }

    #[test]
    fn movie_title_joins_and_restricts_visibility() {
        let params = PersonSearchParams {
            movie_title: Some("Matrix".into()),
            order_by: Some("popularity".into()),
            direction: Some("desc".into()),
            ..Default::default()
        };

        let public = search(&params, Visibility::PublicOnly).unwrap();
        assert_eq!(
            public.sql,
            format!(
                "{PERSON_FROM} JOIN movie_person mp ON mp.person_id = p.id \
                 JOIN movie m ON m.id = mp.movie_id \
                 WHERE m.title LIKE $1 AND m.hidden = FALSE \
                 ORDER BY p.popularity DESC, p.id ASC LIMIT 10 OFFSET 0"
            )
        );

        let elevated = search(&params, Visibility::IncludeHidden).unwrap();
        assert!(!elevated.sql.contains("m.hidden"));
        assert!(elevated.sql.contains("JOIN movie m"));
    }

    #[test]
    fn birthday_sort_and_paging() {
        let query = search(
            &PersonSearchParams {
                order_by: Some("birthday".into()),
                limit: Some("50".into()),
                page: Some("2".into()),
                ..Default::default()
            },
            Visibility::IncludeHidden,
        )
        .unwrap();
        assert!(query
            .sql
            .ends_with("ORDER BY p.birthday ASC, p.id ASC LIMIT 50 OFFSET 50"));
    }

    #[test]
    fn movie_sort_fields_are_rejected() {
        assert_matches!(
            search(
                &PersonSearchParams {
                    order_by: Some("title".into()),
                    ..Default::default()
                },
                Visibility::PublicOnly,
            ),
            Err(CoreError::InvalidParameter(MoviesResult::InvalidOrderBy))
        );
    }

    #[test]
    fn detail_has_no_visibility_predicate() {
        let query = detail(11);
        assert_eq!(
            query.sql,
            "SELECT p.id, p.name, p.birthday, p.biography, p.birthplace, \
             p.popularity, p.profile_path FROM person p WHERE p.id = $1"
        );
        assert_eq!(query.params, vec![SqlValue::Integer(11)]);
    }
}
