/// All database primary keys are PostgreSQL BIGINT.
pub type DbId = i64;

/// Calendar dates (birthdays) carry no time zone.
pub type Date = chrono::NaiveDate;
