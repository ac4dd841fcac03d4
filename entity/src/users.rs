use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    // sqlite reports unique violations as "UNIQUE constraint failed: <table>.<column>"
    pub const UQ_USERS_USERNAME: &str = "users.username";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt digest, never the plaintext
    pub password: String,
    pub role: Role,
    pub grade: Option<String>,
    pub avatar: Option<String>,
}

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wrong_questions::Entity")]
    WrongQuestions,
    #[sea_orm(has_many = "super::study_records::Entity")]
    StudyRecords,
}

impl Related<super::wrong_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WrongQuestions.def()
    }
}

impl Related<super::study_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_username(username: &str) -> Select<Entity> {
        Self::find().filter(Column::Username.eq(username))
    }
}
