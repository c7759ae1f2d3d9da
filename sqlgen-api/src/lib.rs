pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
