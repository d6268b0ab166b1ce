pub mod request;
pub mod schedule;
pub mod tier;
