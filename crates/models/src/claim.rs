use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub preferred_route: String,
    pub age_of_mc_authority: i32,
    pub is_read: bool,
    pub is_archived: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Validated claim fields ready for insertion.
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub preferred_route: String,
    pub age_of_mc_authority: i32,
}

pub async fn create(db: &DatabaseConnection, new: NewClaim) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        full_name: Set(new.full_name),
        email: Set(new.email),
        phone: Set(new.phone),
        company_name: Set(new.company_name),
        preferred_route: Set(new.preferred_route),
        age_of_mc_authority: Set(new.age_of_mc_authority),
        is_read: Set(false),
        is_archived: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
