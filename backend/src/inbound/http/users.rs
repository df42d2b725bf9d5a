//! User registration and login handlers.
//!
//! ```text
//! POST /api/users {"username":"ada","email":"ada@example.com","password":"pw"}
//! POST /api/login {"username":"ada","password":"pw"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Registration request body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Login name; duplicates are allowed.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plaintext password (mock service; nothing is hashed).
    pub password: String,
}

/// Public view of a user, without the password.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Server-assigned unique id.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Login request body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Deterministic token derived from the user id; carries no expiry or
    /// signature.
    #[schema(example = "token_3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Id of the authenticated user.
    pub user_id: String,
}

/// Register a new user.
///
/// Referential checks are deliberately absent: the id is always fresh, but
/// nothing prevents two users from sharing a username.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserProfile),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let CreateUserRequest {
        username,
        email,
        password,
    } = payload.into_inner();
    let user = User::new(username, email, password);
    let profile = UserProfile::from(&user);
    state.store.insert_user(user);
    HttpResponse::Created().json(profile)
}

/// Authenticate and mint the deterministic access token.
///
/// Empty credentials are not rejected up front: they simply fail to match any
/// stored user, so every mismatch takes the same 401 path.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { username, password } = payload.into_inner();
    let user = state
        .store
        .user_matching(&username, &password)
        .ok_or_else(|| Error::unauthorized("Invalid credentials"))?;
    Ok(web::Json(LoginResponse {
        access_token: user.access_token(),
        token_type: "bearer".to_owned(),
        user_id: user.id,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::state::HttpState;
    use crate::server::build_app;

    async fn create<S, B>(app: &S, username: &str, password: &str) -> UserProfile
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse<B>,
                Error = actix_web::Error,
            >,
        B: actix_web::body::MessageBody,
    {
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": password,
            }))
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        actix_test::read_body_json(response).await
    }

    #[actix_web::test]
    async fn create_user_returns_fresh_unique_ids() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let first = create(&app, "ada", "pw").await;
        let second = create(&app, "ada", "pw").await;
        assert_ne!(first.id, second.id);
        assert_eq!(first.username, "ada");
        assert_eq!(first.email, "ada@example.com");
    }

    #[actix_web::test]
    async fn create_user_response_omits_password() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "pw",
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let value: Value = actix_test::read_body_json(response).await;
        assert!(value.get("password").is_none());
    }

    #[actix_web::test]
    async fn create_user_with_missing_field_is_unprocessable() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "incomplete" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let value: Value = actix_test::read_body_json(response).await;
        assert!(value.get("detail").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn login_round_trips_created_credentials() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let profile = create(&app, "ada", "SecurePass123!").await;

        let request = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "ada", "password": "SecurePass123!" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: LoginResponse = actix_test::read_body_json(response).await;
        assert_eq!(body.user_id, profile.id);
        assert_eq!(body.token_type, "bearer");
        assert_eq!(body.access_token, format!("token_{}", profile.id));
    }

    #[actix_web::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        create(&app, "ada", "right").await;

        let request = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "ada", "password": "wrong" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("detail").and_then(Value::as_str),
            Some("Invalid credentials")
        );
    }

    #[actix_web::test]
    async fn login_against_empty_store_is_unauthorized() {
        let app = actix_test::init_service(build_app(HttpState::new())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "nobody", "password": "" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
