pub mod activities;
pub mod seed;
pub mod users;
