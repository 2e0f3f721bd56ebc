//! HTTP surface of the Tourbook backend
//!
//! Thin actix-web adapters over the services in `tb_core`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
