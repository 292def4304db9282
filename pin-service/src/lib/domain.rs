pub mod pin;
pub mod user;
