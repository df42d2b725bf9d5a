//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST surface. The document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::catalogue::{CompanyStatus, Feature, Method};
use crate::domain::finance::DashboardSummary;
use crate::domain::insights::{ExploreEntry, StatsOverview, StatsPoint, Theme, ThemeMode};
use crate::inbound::http::catalogue as catalogue_api;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::finance as finance_api;
use crate::inbound::http::finance::{
    DashboardResponse, FinancialRecordResponse, SubmitFinancialData,
};
use crate::inbound::http::health as health_api;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::insights as insights_api;
use crate::inbound::http::users as users_api;
use crate::inbound::http::users::{CreateUserRequest, LoginRequest, LoginResponse, UserProfile};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FinPercent API",
        description = "Mock personal-finance backend: in-memory users, financial records, and static reference content."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        health_api::health,
        users_api::create_user,
        users_api::login,
        catalogue_api::list_methods,
        catalogue_api::get_method,
        catalogue_api::list_features,
        catalogue_api::get_feature,
        finance_api::submit_financial_data,
        finance_api::get_financial_data,
        finance_api::get_dashboard,
        insights_api::get_theme,
        insights_api::set_theme,
        insights_api::get_stats,
        insights_api::get_explore,
    ),
    components(schemas(
        ErrorBody,
        HealthResponse,
        CreateUserRequest,
        UserProfile,
        LoginRequest,
        LoginResponse,
        Method,
        Feature,
        SubmitFinancialData,
        FinancialRecordResponse,
        DashboardResponse,
        DashboardSummary,
        CompanyStatus,
        Theme,
        ThemeMode,
        StatsOverview,
        StatsPoint,
        ExploreEntry,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "users", description = "Registration and login"),
        (name = "catalogue", description = "Static reference content"),
        (name = "finance", description = "Financial records and dashboard"),
        (name = "insights", description = "Theme, stats, and explore mocks")
    )
)]
pub struct ApiDoc;
