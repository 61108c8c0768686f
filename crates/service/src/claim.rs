//! Claim submission use case: validate, persist, shape.

use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domain::{ClaimRecord, Submitted};
use crate::errors::ServiceError;
use crate::schemas::ValidClaim;
use models::claim::{self, NewClaim};

#[instrument(skip_all)]
pub async fn submit_claim(
    db: &DatabaseConnection,
    input: &Value,
) -> Result<Submitted<ClaimRecord>, ServiceError> {
    let valid = ValidClaim::parse(input).map_err(ServiceError::Validation)?;

    let created = claim::create(
        db,
        NewClaim {
            full_name: valid.full_name,
            email: valid.email,
            phone: valid.phone,
            company_name: valid.company_name,
            preferred_route: valid.preferred_route,
            age_of_mc_authority: valid.age_of_mc_authority,
        },
    )
    .await?;

    let record = ClaimRecord::from(created);
    info!(claim_id = record.id, email = %record.email, "claim submission created");

    Ok(Submitted { message: "Claim request received successfully.".into(), data: record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn submit_claim_persists_shaped_record() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("svc_claim_{}@example.com", Uuid::new_v4());
        let out = submit_claim(
            &db,
            &json!({
                "full_name": "Jane Doe",
                "email": email,
                "company_name": "Acme Freight",
                "preferred_route": "TX-CA",
                "age_of_mc_authority": 0
            }),
        )
        .await?;

        assert_eq!(out.message, "Claim request received successfully.");
        assert_eq!(out.data.age_of_mc_authority, 0);
        assert_eq!(out.data.email, email);
        Ok(())
    }

    #[tokio::test]
    async fn negative_age_never_reaches_the_store() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let err = submit_claim(
            &db,
            &json!({
                "full_name": "Jane Doe",
                "email": "jane@x.com",
                "company_name": "Acme Freight",
                "preferred_route": "TX-CA",
                "age_of_mc_authority": -1
            }),
        )
        .await
        .unwrap_err();

        match err {
            ServiceError::Validation(fields) => {
                assert!(fields.contains("age_of_mc_authority"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }
}
