//! API endpoint handlers.

pub mod config;
pub mod export;
pub mod health;
pub mod results;
pub mod runs;
