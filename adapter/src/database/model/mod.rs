pub mod auth;
pub mod booking;
pub mod ground;
pub mod user;
