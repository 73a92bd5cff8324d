//! Page components, one per route.

pub mod admin_generator;
pub mod console;
pub mod dashboard;
pub mod kyc;
pub mod login;
pub mod users;
