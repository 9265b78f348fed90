pub mod config;
pub mod error;
pub mod orrery;
pub mod types;
