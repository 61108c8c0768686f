//! Create `contacts` table.
//!
//! Stores contact-form submissions; `is_read`/`is_archived` are operator
//! flags mutated outside the submission flow.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string_len(Contact::FirstName, 100).not_null())
                    .col(string_len(Contact::LastName, 100).not_null())
                    .col(string_len(Contact::Email, 255).not_null())
                    .col(ColumnDef::new(Contact::Phone).string_len(20).null())
                    .col(text(Contact::Message).not_null())
                    .col(boolean(Contact::IsRead).not_null().default(false))
                    .col(boolean(Contact::IsArchived).not_null().default(false))
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Contact::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact {
    #[sea_orm(iden = "contacts")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
    IsRead,
    IsArchived,
    CreatedAt,
    UpdatedAt,
}
