//! Create `claims` table for route/authority claim requests.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claim::Table)
                    .if_not_exists()
                    .col(pk_auto(Claim::Id))
                    .col(string_len(Claim::FullName, 255).not_null())
                    .col(string_len(Claim::Email, 255).not_null())
                    .col(ColumnDef::new(Claim::Phone).string_len(20).null())
                    .col(string_len(Claim::CompanyName, 255).not_null())
                    .col(string_len(Claim::PreferredRoute, 255).not_null())
                    .col(integer(Claim::AgeOfMcAuthority).not_null())
                    .col(boolean(Claim::IsRead).not_null().default(false))
                    .col(boolean(Claim::IsArchived).not_null().default(false))
                    .col(timestamp_with_time_zone(Claim::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Claim::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Claim::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Claim {
    #[sea_orm(iden = "claims")]
    Table,
    Id,
    FullName,
    Email,
    Phone,
    CompanyName,
    PreferredRoute,
    AgeOfMcAuthority,
    IsRead,
    IsArchived,
    CreatedAt,
    UpdatedAt,
}
