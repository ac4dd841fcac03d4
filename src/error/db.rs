use sea_orm::{DbErr, SqlErr};

pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    // sqlite does not expose constraint names, only messages of the form
    // "UNIQUE constraint failed: <table>.<column>"
    fn unique_violation(&self, constraint: &str) -> bool {
        match self.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => message.contains(constraint),
            _ => false,
        }
    }
}
