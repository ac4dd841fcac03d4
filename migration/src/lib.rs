mod utils;

pub use sea_orm_migration::prelude::*;

mod m20250118_093214_create_users_table;
mod m20250118_094520_create_courses_table;
mod m20250118_095311_create_questions_table;
mod m20250119_121400_create_wrong_questions_table;
mod m20250119_123955_create_study_records_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250118_093214_create_users_table::Migration),
            Box::new(m20250118_094520_create_courses_table::Migration),
            Box::new(m20250118_095311_create_questions_table::Migration),
            Box::new(m20250119_121400_create_wrong_questions_table::Migration),
            Box::new(m20250119_123955_create_study_records_table::Migration),
        ]
    }
}
