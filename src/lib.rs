pub mod config;
pub mod container;
pub mod model;
pub mod persistence;
pub mod queries;
mod utils;
