//! Per-workflow create-schemas.
//!
//! Each schema turns the raw JSON body into a fully-typed, normalized payload
//! or a [`FieldErrors`] map covering every offending field at once.

use serde_json::Value;

use crate::validate::{normalize_email, FieldErrors, RawInput};

const MIN_MESSAGE_LEN: usize = 10;
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct ValidContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ValidContact {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        let raw = RawInput::new(input);
        let mut errs = FieldErrors::default();

        let first_name = raw.required_trimmed("first_name", "First name", &mut errs);
        let last_name = raw.required_trimmed("last_name", "Last name", &mut errs);
        let email = raw.required_email("email", "Email", &mut errs);
        let phone = raw.optional_trimmed("phone");
        let message = raw.required_trimmed("message", "Message", &mut errs).and_then(|m| {
            if m.chars().count() < MIN_MESSAGE_LEN {
                errs.add("message", "Message must be at least 10 characters long.");
                None
            } else {
                Some(m)
            }
        });

        match (first_name, last_name, email, message) {
            (Some(first_name), Some(last_name), Some(email), Some(message))
                if errs.is_empty() =>
            {
                Ok(Self { first_name, last_name, email, phone, message })
            }
            _ => Err(errs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupType {
    Company,
    OwnerOperator,
}

impl SignupType {
    pub fn as_str(self) -> &'static str {
        match self {
            SignupType::Company => "company",
            SignupType::OwnerOperator => "owner-operator",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "company" => Some(SignupType::Company),
            "owner-operator" => Some(SignupType::OwnerOperator),
            _ => None,
        }
    }
}

/// Validated signup payload. `password` has passed the length check but is
/// deliberately discarded by the service: this deployment does not provision
/// a linked account, and the credential is never persisted anywhere.
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub signup_type: SignupType,
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
    pub password: String,
}

impl ValidSignup {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        let raw = RawInput::new(input);
        let mut errs = FieldErrors::default();

        // Contact-person block, always required
        let first_name = raw.required_trimmed("first_name", "First name", &mut errs);
        let last_name = raw.required_trimmed("last_name", "Last name", &mut errs);
        let contact_number = raw.required_trimmed("contact_number", "Contact number", &mut errs);
        let communication_method =
            raw.required_trimmed("communication_method", "Communication method", &mut errs);
        let email = raw.required_email("email", "Email", &mut errs).map(|e| normalize_email(&e));

        let password = raw.required_trimmed("password", "Password", &mut errs).and_then(|p| {
            if p.chars().count() < MIN_PASSWORD_LEN {
                errs.add("password", "Password must be at least 8 characters long.");
                None
            } else {
                Some(p)
            }
        });

        let signup_type = match raw.required_trimmed("signup_type", "Signup type", &mut errs) {
            Some(value) => match SignupType::parse(&value) {
                Some(t) => Some(t),
                None => {
                    errs.add(
                        "signup_type",
                        "signup_type must be either 'company' or 'owner-operator'.",
                    );
                    None
                }
            },
            None => None,
        };

        // Variant triplet: required for the selected type, the other
        // variant's fields are ignored even if supplied. These checks run
        // after the type check and append to the same error collection.
        let mut company_name = None;
        let mut company_email = None;
        let mut company_contact_number = None;
        let mut owner_name = None;
        let mut owner_email = None;
        let mut owner_contact_number = None;
        match signup_type {
            Some(SignupType::Company) => {
                company_name = raw.required_trimmed("company_name", "Company name", &mut errs);
                company_email = raw
                    .required_email("company_email", "Company email", &mut errs)
                    .map(|e| normalize_email(&e));
                company_contact_number =
                    raw.required_trimmed("company_contact_number", "Company contact number", &mut errs);
            }
            Some(SignupType::OwnerOperator) => {
                owner_name = raw.required_trimmed("owner_name", "Owner name", &mut errs);
                owner_email = raw
                    .required_email("owner_email", "Owner email", &mut errs)
                    .map(|e| normalize_email(&e));
                owner_contact_number =
                    raw.required_trimmed("owner_contact_number", "Owner contact number", &mut errs);
            }
            None => {}
        }

        let motor_carrier_no = raw.optional_trimmed("motor_carrier_no");
        let truck_type = raw.optional_trimmed("truck_type");
        let operation_area = raw.optional_trimmed("operation_area");
        let authority_age = parse_optional_count(&raw, "authority_age", "Authority age", &mut errs);
        let number_of_trucks =
            parse_optional_count(&raw, "number_of_trucks", "Number of trucks", &mut errs);

        match (signup_type, first_name, last_name, contact_number, communication_method, email, password)
        {
            (
                Some(signup_type),
                Some(first_name),
                Some(last_name),
                Some(contact_number),
                Some(communication_method),
                Some(email),
                Some(password),
            ) if errs.is_empty() => Ok(Self {
                signup_type,
                company_name,
                company_email,
                company_contact_number,
                owner_name,
                owner_email,
                owner_contact_number,
                motor_carrier_no,
                authority_age,
                number_of_trucks,
                truck_type,
                operation_area,
                first_name,
                last_name,
                contact_number,
                communication_method,
                email,
                password,
            }),
            _ => Err(errs),
        }
    }

    /// The normalized variant email for the chosen type, when supplied.
    pub fn variant_email(&self) -> Option<&str> {
        match self.signup_type {
            SignupType::Company => self.company_email.as_deref(),
            SignupType::OwnerOperator => self.owner_email.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidClaim {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub preferred_route: String,
    pub age_of_mc_authority: i32,
}

impl ValidClaim {
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        let raw = RawInput::new(input);
        let mut errs = FieldErrors::default();

        let full_name = raw.required_trimmed("full_name", "Full name", &mut errs);
        let email = raw.required_email("email", "Email", &mut errs);
        let phone = raw.optional_trimmed("phone");
        let company_name = raw.required_trimmed("company_name", "Company name", &mut errs);
        let preferred_route = raw.required_trimmed("preferred_route", "Preferred route", &mut errs);

        let age = match raw.integer("age_of_mc_authority") {
            Ok(Some(age)) if (0..=i64::from(i32::MAX)).contains(&age) => Some(age as i32),
            Ok(Some(age)) if age < 0 => {
                errs.add("age_of_mc_authority", "Age of MC authority must be zero or greater.");
                None
            }
            Ok(Some(_)) | Err(()) => {
                errs.add("age_of_mc_authority", "A valid integer is required.");
                None
            }
            Ok(None) => {
                errs.add("age_of_mc_authority", "Age of MC authority is required.");
                None
            }
        };

        match (full_name, email, company_name, preferred_route, age) {
            (Some(full_name), Some(email), Some(company_name), Some(preferred_route), Some(age))
                if errs.is_empty() =>
            {
                Ok(Self {
                    full_name,
                    email,
                    phone,
                    company_name,
                    preferred_route,
                    age_of_mc_authority: age,
                })
            }
            _ => Err(errs),
        }
    }
}

/// Optional non-negative integer (fleet sizes, authority age in years).
fn parse_optional_count(
    raw: &RawInput<'_>,
    key: &str,
    label: &str,
    errs: &mut FieldErrors,
) -> Option<i32> {
    match raw.integer(key) {
        Ok(Some(n)) if (0..=i64::from(i32::MAX)).contains(&n) => Some(n as i32),
        Ok(Some(n)) if n < 0 => {
            errs.add(key, format!("{label} must be zero or greater."));
            None
        }
        Ok(Some(_)) | Err(()) => {
            errs.add(key, "A valid integer is required.");
            None
        }
        Ok(None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact_body() -> Value {
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@x.com",
            "message": "Need dispatch help please"
        })
    }

    #[test]
    fn contact_happy_path_trims_fields() {
        let mut body = contact_body();
        body["first_name"] = json!("  Jane ");
        body["phone"] = json!(" 555-0100 ");
        let valid = ValidContact::parse(&body).unwrap();
        assert_eq!(valid.first_name, "Jane");
        assert_eq!(valid.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn contact_message_minimum_length_is_post_trim() {
        let mut body = contact_body();
        body["message"] = json!("   short    ");
        let errs = ValidContact::parse(&body).unwrap_err();
        assert_eq!(errs.messages("message"), ["Message must be at least 10 characters long."]);
    }

    #[test]
    fn contact_collects_all_field_errors() {
        let body = json!({"email": "not-an-email", "message": "hi"});
        let errs = ValidContact::parse(&body).unwrap_err();
        assert!(errs.contains("first_name"));
        assert!(errs.contains("last_name"));
        assert!(errs.contains("email"));
        assert!(errs.contains("message"));
        assert_eq!(errs.len(), 4);
    }

    #[test]
    fn contact_phone_is_optional() {
        let valid = ValidContact::parse(&contact_body()).unwrap();
        assert_eq!(valid.phone, None);
    }

    fn signup_body(signup_type: &str) -> Value {
        let mut body = json!({
            "signup_type": signup_type,
            "first_name": "Jane",
            "last_name": "Doe",
            "contact_number": "555-0100",
            "communication_method": "email",
            "email": "Jane@X.com",
            "password": "hunter2hunter2"
        });
        match signup_type {
            "company" => {
                body["company_name"] = json!("Acme Freight");
                body["company_email"] = json!("Fleet@Acme.com");
                body["company_contact_number"] = json!("555-0199");
            }
            "owner-operator" => {
                body["owner_name"] = json!("Jane Doe Trucking");
                body["owner_email"] = json!("owner@doe.com");
                body["owner_contact_number"] = json!("555-0188");
            }
            _ => {}
        }
        body
    }

    #[test]
    fn signup_company_happy_path_normalizes_emails() {
        let valid = ValidSignup::parse(&signup_body("company")).unwrap();
        assert_eq!(valid.signup_type, SignupType::Company);
        assert_eq!(valid.email, "jane@x.com");
        assert_eq!(valid.company_email.as_deref(), Some("fleet@acme.com"));
        assert_eq!(valid.variant_email(), Some("fleet@acme.com"));
    }

    #[test]
    fn signup_rejects_unknown_type_with_field_error() {
        let errs = ValidSignup::parse(&signup_body("franchise")).unwrap_err();
        assert_eq!(
            errs.messages("signup_type"),
            ["signup_type must be either 'company' or 'owner-operator'."]
        );
    }

    #[test]
    fn signup_company_requires_company_triplet() {
        let mut body = signup_body("company");
        body.as_object_mut().unwrap().remove("company_email");
        let errs = ValidSignup::parse(&body).unwrap_err();
        assert_eq!(errs.messages("company_email"), ["Company email is required."]);
    }

    #[test]
    fn signup_owner_operator_ignores_company_fields() {
        let mut body = signup_body("owner-operator");
        body["company_email"] = json!("stray@acme.com");
        let valid = ValidSignup::parse(&body).unwrap();
        assert_eq!(valid.signup_type, SignupType::OwnerOperator);
        assert_eq!(valid.company_email, None);
        assert_eq!(valid.owner_email.as_deref(), Some("owner@doe.com"));
        assert_eq!(valid.variant_email(), Some("owner@doe.com"));
    }

    #[test]
    fn signup_password_minimum_length() {
        let mut body = signup_body("company");
        body["password"] = json!("short");
        let errs = ValidSignup::parse(&body).unwrap_err();
        assert_eq!(errs.messages("password"), ["Password must be at least 8 characters long."]);
    }

    #[test]
    fn signup_business_fields_are_optional_but_typed() {
        let mut body = signup_body("company");
        body["authority_age"] = json!("5");
        body["number_of_trucks"] = json!(12);
        body["truck_type"] = json!("reefer");
        let valid = ValidSignup::parse(&body).unwrap();
        assert_eq!(valid.authority_age, Some(5));
        assert_eq!(valid.number_of_trucks, Some(12));

        body["number_of_trucks"] = json!("many");
        let errs = ValidSignup::parse(&body).unwrap_err();
        assert_eq!(errs.messages("number_of_trucks"), ["A valid integer is required."]);
    }

    #[test]
    fn signup_missing_type_still_reports_contact_errors() {
        let body = json!({"password": "hunter2hunter2"});
        let errs = ValidSignup::parse(&body).unwrap_err();
        assert!(errs.contains("signup_type"));
        assert!(errs.contains("first_name"));
        assert!(errs.contains("email"));
        // No variant errors without a resolved type
        assert!(!errs.contains("company_email"));
        assert!(!errs.contains("owner_email"));
    }

    fn claim_body() -> Value {
        json!({
            "full_name": "Jane Doe",
            "email": "jane@x.com",
            "company_name": "Acme Freight",
            "preferred_route": "TX-CA",
            "age_of_mc_authority": 2
        })
    }

    #[test]
    fn claim_happy_path() {
        let valid = ValidClaim::parse(&claim_body()).unwrap();
        assert_eq!(valid.age_of_mc_authority, 2);
        assert_eq!(valid.phone, None);
    }

    #[test]
    fn claim_age_zero_is_accepted() {
        let mut body = claim_body();
        body["age_of_mc_authority"] = json!(0);
        let valid = ValidClaim::parse(&body).unwrap();
        assert_eq!(valid.age_of_mc_authority, 0);
    }

    #[test]
    fn claim_age_negative_is_rejected() {
        let mut body = claim_body();
        body["age_of_mc_authority"] = json!(-1);
        let errs = ValidClaim::parse(&body).unwrap_err();
        assert_eq!(
            errs.messages("age_of_mc_authority"),
            ["Age of MC authority must be zero or greater."]
        );
    }

    #[test]
    fn claim_age_missing_or_garbage_is_rejected() {
        let mut body = claim_body();
        body.as_object_mut().unwrap().remove("age_of_mc_authority");
        let errs = ValidClaim::parse(&body).unwrap_err();
        assert_eq!(errs.messages("age_of_mc_authority"), ["Age of MC authority is required."]);

        let mut body = claim_body();
        body["age_of_mc_authority"] = json!("several");
        let errs = ValidClaim::parse(&body).unwrap_err();
        assert_eq!(errs.messages("age_of_mc_authority"), ["A valid integer is required."]);
    }
}
