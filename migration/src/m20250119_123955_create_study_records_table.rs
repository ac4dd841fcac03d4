use entity::study_records::{self, constraints::*};
use entity::users;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(study_records::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(study_records::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(study_records::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(study_records::Column::Date)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(study_records::Column::Count)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STUDY_RECORDS_USERS)
                            .from(study_records::Entity, study_records::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // the conflict target for the insert-or-increment upsert
        manager
            .create_index(
                Index::create()
                    .name(UQ_STUDY_RECORDS_USER_DATE)
                    .table(study_records::Entity)
                    .col(study_records::Column::UserId)
                    .col(study_records::Column::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(study_records::Entity).to_owned())
            .await
    }
}
