pub mod backend;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
