use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "signups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub signup_type: String,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub company_contact_number: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_contact_number: Option<String>,
    pub motor_carrier_no: Option<String>,
    pub authority_age: Option<i32>,
    pub number_of_trucks: Option<i32>,
    pub truck_type: Option<String>,
    pub operation_area: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub communication_method: String,
    pub email: String,
    pub is_approved: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Company or owner name, falling back to the contact person.
    pub fn primary_name(&self) -> String {
        self.company_name
            .as_deref()
            .or(self.owner_name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!("{} {}", self.first_name, self.last_name).trim().to_string()
            })
    }

    /// Company or owner email, falling back to the contact person email.
    pub fn primary_email(&self) -> String {
        self.company_email
            .as_deref()
            .or(self.owner_email.as_deref())
            .unwrap_or(&self.email)
            .to_string()
    }

    /// Company or owner phone, falling back to the contact person number.
    pub fn primary_contact_number(&self) -> String {
        self.company_contact_number
            .as_deref()
            .or(self.owner_contact_number.as_deref())
            .unwrap_or(&self.contact_number)
            .to_string()
    }
}

/// Validated signup fields ready for insertion. Exactly one of the
/// company/owner triplets is populated; the caller enforces that.
#[derive(Debug, Clone, Default)]
pub struct NewSignup {
    pub signup_type: String,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub company_contact_number: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_contact_number: Option<String>,
    pub motor_carrier_no: Option<String>,
    pub authority_age: Option<i32>,
    pub number_of_trucks: Option<i32>,
    pub truck_type: Option<String>,
    pub operation_area: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub communication_method: String,
    pub email: String,
}

pub async fn create(db: &DatabaseConnection, new: NewSignup) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        signup_type: Set(new.signup_type),
        company_name: Set(new.company_name),
        company_email: Set(new.company_email),
        company_contact_number: Set(new.company_contact_number),
        owner_name: Set(new.owner_name),
        owner_email: Set(new.owner_email),
        owner_contact_number: Set(new.owner_contact_number),
        motor_carrier_no: Set(new.motor_carrier_no),
        authority_age: Set(new.authority_age),
        number_of_trucks: Set(new.number_of_trucks),
        truck_type: Set(new.truck_type),
        operation_area: Set(new.operation_area),
        first_name: Set(new.first_name),
        last_name: Set(new.last_name),
        contact_number: Set(new.contact_number),
        communication_method: Set(new.communication_method),
        email: Set(new.email),
        is_approved: Set(false),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        // Concurrent identical submissions can slip past the service-level
        // uniqueness SELECT; the unique key closes that race here.
        Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::Conflict("email".into()),
        _ => ModelError::Db(e.to_string()),
    })
}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Look up a signup by any of its email columns. Used by the uniqueness
/// checks, which run against normalized (lower-cased) addresses.
pub async fn email_taken(db: &DatabaseConnection, email: &str) -> Result<bool, ModelError> {
    let found = Entity::find()
        .filter(
            Column::Email
                .eq(email)
                .or(Column::CompanyEmail.eq(email))
                .or(Column::OwnerEmail.eq(email)),
        )
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}
