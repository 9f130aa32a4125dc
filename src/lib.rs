pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod file_store;
