pub mod claim;
pub mod contact;
pub mod db;
pub mod errors;
pub mod signup;
