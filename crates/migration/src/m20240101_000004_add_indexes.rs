use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contacts: inbox-style lookups by email, recency, and operator flags
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_email")
                    .table(Contact::Table)
                    .col(Contact::Email)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_created_at")
                    .table(Contact::Table)
                    .col(Contact::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_read_archived")
                    .table(Contact::Table)
                    .col(Contact::IsRead)
                    .col(Contact::IsArchived)
                    .to_owned(),
            )
            .await?;

        // Signups: recency listing
        manager
            .create_index(
                Index::create()
                    .name("idx_signups_created_at")
                    .table(Signup::Table)
                    .col(Signup::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Claims: lookups by email and operator flags
        manager
            .create_index(
                Index::create()
                    .name("idx_claims_email")
                    .table(Claim::Table)
                    .col(Claim::Email)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_claims_read_archived")
                    .table(Claim::Table)
                    .col(Claim::IsRead)
                    .col(Claim::IsArchived)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_contacts_email",
            "idx_contacts_created_at",
            "idx_contacts_read_archived",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Contact::Table).to_owned())
                .await?;
        }
        manager
            .drop_index(Index::drop().name("idx_signups_created_at").table(Signup::Table).to_owned())
            .await?;
        for name in ["idx_claims_email", "idx_claims_read_archived"] {
            manager
                .drop_index(Index::drop().name(name).table(Claim::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Contact {
    #[sea_orm(iden = "contacts")]
    Table,
    Email,
    IsRead,
    IsArchived,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Signup {
    #[sea_orm(iden = "signups")]
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Claim {
    #[sea_orm(iden = "claims")]
    Table,
    Email,
    IsRead,
    IsArchived,
}
