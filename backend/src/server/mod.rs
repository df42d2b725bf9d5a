//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::catalogue::{get_feature, get_method, list_features, list_methods};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::finance::{get_dashboard, get_financial_data, submit_financial_data};
use crate::inbound::http::health::health;
use crate::inbound::http::insights::{get_explore, get_stats, get_theme, set_theme};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, login};
use crate::middleware::RequestId;

/// Assemble the application with every endpoint and middleware wired.
///
/// Used by both the real server and the test harnesses, so handler tests run
/// against the same JSON error handling and routing as production.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health)
        .service(create_user)
        .service(login)
        .service(list_methods)
        .service(get_method)
        .service(list_features)
        .service(get_feature)
        .service(submit_financial_data)
        .service(get_financial_data)
        .service(get_dashboard)
        .service(get_theme)
        .service(set_theme)
        .service(get_stats)
        .service(get_explore);

    // The frontend is served from a different origin in every deployment of
    // this mock, so CORS stays wide open.
    let app = App::new()
        .wrap(RequestId)
        .wrap(Cors::permissive())
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound per the configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = HttpState::new();
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}
