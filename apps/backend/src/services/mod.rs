pub mod auth;
pub mod roster;
