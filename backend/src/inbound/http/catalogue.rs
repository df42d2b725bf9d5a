//! Reference catalogue read endpoints.
//!
//! ```text
//! GET /api/methods
//! GET /api/methods/{method_id}
//! GET /api/features
//! GET /api/features/{feature_id}
//! ```
//!
//! Everything served here is static data; the endpoints are idempotent.

use actix_web::{get, web};
use crate::domain::Error;
use crate::domain::catalogue::{FEATURES, Feature, METHODS, Method, find_feature, find_method};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;

/// List the fixed budgeting methods.
#[utoipa::path(
    get,
    path = "/api/methods",
    responses((status = 200, description = "All methods", body = [Method])),
    tags = ["catalogue"],
    operation_id = "listMethods"
)]
#[get("/methods")]
pub async fn list_methods() -> web::Json<Vec<Method>> {
    web::Json(METHODS.to_vec())
}

/// Fetch one budgeting method by id.
#[utoipa::path(
    get,
    path = "/api/methods/{method_id}",
    params(("method_id" = String, Path, description = "Method identifier")),
    responses(
        (status = 200, description = "The method", body = Method),
        (status = 404, description = "Unknown method id", body = ErrorBody)
    ),
    tags = ["catalogue"],
    operation_id = "getMethod"
)]
#[get("/methods/{method_id}")]
pub async fn get_method(path: web::Path<String>) -> ApiResult<web::Json<Method>> {
    find_method(&path)
        .map(web::Json)
        .ok_or_else(|| Error::not_found("Method not found"))
}

/// List the fixed product features.
#[utoipa::path(
    get,
    path = "/api/features",
    responses((status = 200, description = "All features", body = [Feature])),
    tags = ["catalogue"],
    operation_id = "listFeatures"
)]
#[get("/features")]
pub async fn list_features() -> web::Json<Vec<Feature>> {
    web::Json(FEATURES.to_vec())
}

/// Fetch one product feature by id.
#[utoipa::path(
    get,
    path = "/api/features/{feature_id}",
    params(("feature_id" = String, Path, description = "Feature identifier")),
    responses(
        (status = 200, description = "The feature", body = Feature),
        (status = 404, description = "Unknown feature id", body = ErrorBody)
    ),
    tags = ["catalogue"],
    operation_id = "getFeature"
)]
#[get("/features/{feature_id}")]
pub async fn get_feature(path: web::Path<String>) -> ApiResult<web::Json<Feature>> {
    find_feature(&path)
        .map(web::Json)
        .ok_or_else(|| Error::not_found("Feature not found"))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use crate::inbound::http::state::HttpState;
    use crate::server::build_app;

    #[actix_web::test]
    async fn methods_list_is_the_fixed_set() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::get().uri("/api/methods").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let value: Value = actix_test::read_body_json(response).await;
        let ids: Vec<&str> = value
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|m| m.get("id").and_then(Value::as_str))
            .collect();
        assert_eq!(ids, ["nws", "kakeibo", "stop"]);
    }

    #[actix_web::test]
    async fn method_fetch_returns_record() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/methods/kakeibo")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("name").and_then(Value::as_str), Some("Kakeibo"));
    }

    #[rstest]
    #[case("/api/methods/does-not-exist", "Method not found")]
    #[case("/api/features/does-not-exist", "Feature not found")]
    #[actix_web::test]
    async fn unknown_catalogue_ids_are_not_found(#[case] uri: &str, #[case] detail: &str) {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("detail").and_then(Value::as_str), Some(detail));
    }

    #[actix_web::test]
    async fn features_list_carries_status_labels() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::get().uri("/api/features").to_request();
        let response = actix_test::call_service(&app, request).await;
        let value: Value = actix_test::read_body_json(response).await;
        let statuses: Vec<&str> = value
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|f| f.get("status").and_then(Value::as_str))
            .collect();
        assert_eq!(statuses, ["active", "beta", "available"]);
    }
}
