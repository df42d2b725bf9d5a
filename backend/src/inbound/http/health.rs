//! Health endpoint.

use actix_web::{get, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy`; the process answering is the signal.
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Current server time, RFC 3339.
    #[schema(example = "2026-08-29T12:00:00+00:00")]
    pub timestamp: String,
}

/// Liveness check. Never fails while the process can serve requests.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tags = ["health"],
    operation_id = "healthCheck"
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test, web};
    use chrono::DateTime;
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn health_reports_status_and_timestamp() {
        let app =
            actix_test::init_service(App::new().service(web::scope("/api").service(health))).await;
        let request = actix_test::TestRequest::get().uri("/api/health").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("status").and_then(Value::as_str), Some("healthy"));
        let timestamp = value
            .get("timestamp")
            .and_then(Value::as_str)
            .expect("timestamp present");
        DateTime::parse_from_rfc3339(timestamp).expect("timestamp is RFC 3339");
    }
}
