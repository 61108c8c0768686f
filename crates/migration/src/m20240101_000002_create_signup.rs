//! Create `signups` table.
//!
//! One row per business signup; exactly one of the company/owner column
//! triplets is populated depending on `signup_type`. The unique keys on the
//! email columns are the last line of defense for the read-then-write
//! uniqueness check in the signup service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signup::Table)
                    .if_not_exists()
                    .col(pk_auto(Signup::Id))
                    .col(string_len(Signup::SignupType, 32).not_null())
                    .col(ColumnDef::new(Signup::CompanyName).string_len(255).null())
                    .col(
                        ColumnDef::new(Signup::CompanyEmail)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Signup::CompanyContactNumber).string_len(20).null())
                    .col(ColumnDef::new(Signup::OwnerName).string_len(255).null())
                    .col(
                        ColumnDef::new(Signup::OwnerEmail)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Signup::OwnerContactNumber).string_len(20).null())
                    .col(ColumnDef::new(Signup::MotorCarrierNo).string_len(50).null())
                    .col(ColumnDef::new(Signup::AuthorityAge).integer().null())
                    .col(ColumnDef::new(Signup::NumberOfTrucks).integer().null())
                    .col(ColumnDef::new(Signup::TruckType).string_len(100).null())
                    .col(ColumnDef::new(Signup::OperationArea).string_len(255).null())
                    .col(string_len(Signup::FirstName, 100).not_null())
                    .col(string_len(Signup::LastName, 100).not_null())
                    .col(string_len(Signup::ContactNumber, 20).not_null())
                    .col(string_len(Signup::CommunicationMethod, 50).not_null())
                    .col(string_len(Signup::Email, 255).not_null().unique_key())
                    .col(boolean(Signup::IsApproved).not_null().default(false))
                    .col(boolean(Signup::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Signup::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Signup::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Signup::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Signup {
    #[sea_orm(iden = "signups")]
    Table,
    Id,
    SignupType,
    CompanyName,
    CompanyEmail,
    CompanyContactNumber,
    OwnerName,
    OwnerEmail,
    OwnerContactNumber,
    MotorCarrierNo,
    AuthorityAge,
    NumberOfTrucks,
    TruckType,
    OperationArea,
    FirstName,
    LastName,
    ContactNumber,
    CommunicationMethod,
    Email,
    IsApproved,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
