use sea_orm::{entity::prelude::*, JoinType, QuerySelect};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// serialized JSON object mapping choice label to text
    pub options: String,
    pub answer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wrong_questions::Entity")]
    WrongQuestions,
}

impl Related<super::wrong_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WrongQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_subject(subject: &str) -> Select<Entity> {
        Self::find().filter(Column::Subject.eq(subject))
    }

    /// One row per wrong-answer entry, so repeated misses show up repeatedly.
    #[inline]
    pub fn find_missed_by(user_id: i32) -> Select<Entity> {
        Self::find()
            .join(JoinType::InnerJoin, Relation::WrongQuestions.def())
            .filter(super::wrong_questions::Column::UserId.eq(user_id))
    }
}
