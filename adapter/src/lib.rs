pub mod database;
pub mod password;
pub mod payment;
pub mod redis;
pub mod repository;
