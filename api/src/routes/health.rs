use actix_web::{HttpRequest, HttpResponse};
use tb_shared::error_codes;

use crate::handlers::error_body;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tourbook-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    error_body(
        actix_web::http::StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        format!("Can't find {} on this server!", req.path()),
    )
}
