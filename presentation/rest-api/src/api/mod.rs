pub mod analysis;
pub mod error;
pub mod health;
pub mod rate_limit;
pub mod security;
pub mod tags;
pub mod user;
