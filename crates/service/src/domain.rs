//! Read projections ("shaped records") returned by the submission services.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use models::{claim, contact, signup};

/// Successful submission outcome: a human message plus the shaped record.
#[derive(Debug, Clone, Serialize)]
pub struct Submitted<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
}

impl From<contact::Model> for ContactRecord {
    fn from(m: contact::Model) -> Self {
        let full_name = m.full_name();
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            full_name,
            email: m.email,
            phone: m.phone,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

/// Signup projection; carries the three derived primary-* fields alongside
/// the stored columns. The password never appears here.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRecord {
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
    pub primary_name: String,
    pub primary_email: String,
    pub primary_contact_number: String,
    pub is_approved: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl From<signup::Model> for SignupRecord {
    fn from(m: signup::Model) -> Self {
        let primary_name = m.primary_name();
        let primary_email = m.primary_email();
        let primary_contact_number = m.primary_contact_number();
        Self {
            id: m.id,
            signup_type: m.signup_type,
            company_name: m.company_name,
            company_email: m.company_email,
            company_contact_number: m.company_contact_number,
            owner_name: m.owner_name,
            owner_email: m.owner_email,
            owner_contact_number: m.owner_contact_number,
            motor_carrier_no: m.motor_carrier_no,
            authority_age: m.authority_age,
            number_of_trucks: m.number_of_trucks,
            truck_type: m.truck_type,
            operation_area: m.operation_area,
            first_name: m.first_name,
            last_name: m.last_name,
            contact_number: m.contact_number,
            communication_method: m.communication_method,
            email: m.email,
            primary_name,
            primary_email,
            primary_contact_number,
            is_approved: m.is_approved,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimRecord {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub preferred_route: String,
    pub age_of_mc_authority: i32,
    pub created_at: DateTimeWithTimeZone,
}

impl From<claim::Model> for ClaimRecord {
    fn from(m: claim::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            company_name: m.company_name,
            preferred_route: m.preferred_route,
            age_of_mc_authority: m.age_of_mc_authority,
            created_at: m.created_at,
        }
    }
}
