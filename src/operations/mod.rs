pub mod creation;
pub mod query;
pub mod synthesis;
