//! Service layer implementing the three submission use cases on top of models.
//! - Separates business logic from data access.
//! - Per-workflow create-schemas normalize and reject raw JSON input.
//! - Provides clear error types and documented interfaces.

pub mod claim;
pub mod contact;
pub mod domain;
pub mod errors;
pub mod notify;
pub mod schemas;
pub mod signup;
pub mod validate;

#[cfg(test)]
pub mod test_support;
