pub mod config;
pub mod doctors;
