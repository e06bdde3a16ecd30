pub mod movie;
pub mod person;
