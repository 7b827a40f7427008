//! Players API - CRUD service for football players backed by SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

pub use config::Config;
pub use routes::{create_router, AppState};
