pub mod auth;
pub mod booking;
pub mod ground;
pub mod id;
pub mod payment;
pub mod role;
pub mod user;
