pub mod courses;
pub mod questions;
pub mod study_records;
pub mod users;
pub mod wrong_questions;
