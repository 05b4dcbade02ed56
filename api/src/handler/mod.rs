pub mod auth;
pub mod booking;
pub mod ground;
pub mod health;
pub mod payment;
pub mod user;
