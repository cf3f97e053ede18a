pub mod collection;
pub mod config;
pub mod error;
