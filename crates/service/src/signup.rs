//! Signup submission use case.
//!
//! This deployment does not provision a linked user account: the submitted
//! password is length-checked by the schema and then dropped on the floor.
//! That choice is deliberate and documented; see DESIGN.md. The uniqueness
//! checks run strictly after schema validation so they always compare
//! normalized (lower-cased) addresses.

use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domain::{SignupRecord, Submitted};
use crate::errors::ServiceError;
use crate::schemas::{SignupType, ValidSignup};
use crate::validate::FieldErrors;
use models::signup::{self, NewSignup};

#[instrument(skip_all)]
pub async fn submit_signup(
    db: &DatabaseConnection,
    input: &Value,
) -> Result<Submitted<SignupRecord>, ServiceError> {
    let valid = ValidSignup::parse(input).map_err(ServiceError::Validation)?;

    if signup::email_taken(db, &valid.email).await? {
        return Err(ServiceError::Validation(FieldErrors::single(
            "email",
            "A signup with this email already exists.",
        )));
    }
    if let Some(variant_email) = valid.variant_email() {
        if variant_email != valid.email && signup::email_taken(db, variant_email).await? {
            let (field, label) = match valid.signup_type {
                SignupType::Company => ("company_email", "company email"),
                SignupType::OwnerOperator => ("owner_email", "owner email"),
            };
            return Err(ServiceError::Validation(FieldErrors::single(
                field,
                format!("A signup with this {label} already exists."),
            )));
        }
    }

    // The insert maps a unique-key race to the same "already exists"
    // validation outcome (see models::signup::create).
    let created = signup::create(
        db,
        NewSignup {
            signup_type: valid.signup_type.as_str().to_string(),
            company_name: valid.company_name,
            company_email: valid.company_email,
            company_contact_number: valid.company_contact_number,
            owner_name: valid.owner_name,
            owner_email: valid.owner_email,
            owner_contact_number: valid.owner_contact_number,
            motor_carrier_no: valid.motor_carrier_no,
            authority_age: valid.authority_age,
            number_of_trucks: valid.number_of_trucks,
            truck_type: valid.truck_type,
            operation_area: valid.operation_area,
            first_name: valid.first_name,
            last_name: valid.last_name,
            contact_number: valid.contact_number,
            communication_method: valid.communication_method,
            email: valid.email,
        },
    )
    .await?;

    let record = SignupRecord::from(created);
    info!(signup_id = record.id, signup_type = %record.signup_type, "signup submission created");

    Ok(Submitted { message: "Your signup has been submitted successfully!".into(), data: record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;
    use uuid::Uuid;

    fn owner_body(email: &str) -> Value {
        json!({
            "signup_type": "owner-operator",
            "owner_name": "Jane Doe Trucking",
            "owner_email": format!("owner_{}@example.com", Uuid::new_v4()),
            "owner_contact_number": "555-0188",
            "first_name": "Jane",
            "last_name": "Doe",
            "contact_number": "555-0100",
            "communication_method": "email",
            "email": email,
            "password": "hunter2hunter2"
        })
    }

    #[tokio::test]
    async fn submit_signup_computes_primary_fields() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("svc_signup_{}@example.com", Uuid::new_v4());
        let out = submit_signup(&db, &owner_body(&email)).await?;

        assert_eq!(out.data.signup_type, "owner-operator");
        assert_eq!(out.data.primary_name, "Jane Doe Trucking");
        assert_eq!(out.data.primary_email, out.data.owner_email.clone().unwrap());
        assert!(!out.data.is_approved);
        assert!(out.data.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("svc_dup_{}@example.com", Uuid::new_v4());
        submit_signup(&db, &owner_body(&email)).await?;

        let err = submit_signup(&db, &owner_body(&email.to_uppercase())).await.unwrap_err();
        match err {
            ServiceError::Validation(fields) => {
                assert_eq!(fields.messages("email"), ["A signup with this email already exists."]);
            }
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_variant_email_is_rejected() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let owner_email = format!("svc_owner_{}@example.com", Uuid::new_v4());
        let mut first = owner_body(&format!("svc_a_{}@example.com", Uuid::new_v4()));
        first["owner_email"] = json!(owner_email.clone());
        submit_signup(&db, &first).await?;

        let mut second = owner_body(&format!("svc_b_{}@example.com", Uuid::new_v4()));
        second["owner_email"] = json!(owner_email);
        let err = submit_signup(&db, &second).await.unwrap_err();
        match err {
            ServiceError::Validation(fields) => {
                assert!(fields.contains("owner_email"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }
}
