use entity::wrong_questions::{self, constraints::*};
use entity::{questions, users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(wrong_questions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(wrong_questions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(wrong_questions::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(wrong_questions::Column::QuestionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(wrong_questions::Column::CreatedAt)
                            .date()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WRONG_QUESTIONS_USERS)
                            .from(wrong_questions::Entity, wrong_questions::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WRONG_QUESTIONS_QUESTIONS)
                            .from(wrong_questions::Entity, wrong_questions::Column::QuestionId)
                            .to(questions::Entity, questions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(wrong_questions::Entity).to_owned())
            .await
    }
}
