// src/ports/mod.rs
pub mod dto;
pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::{create_router, serve, AppState};
