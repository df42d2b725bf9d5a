//! Financial data and dashboard handlers.
//!
//! ```text
//! POST /api/financial-data
//! GET /api/financial-data/{user_id}
//! GET /api/dashboard/{user_id}
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalogue::CompanyStatus;
use crate::domain::{DashboardSummary, Error, FinancialRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::UserProfile;

/// Submission body for financial figures.
///
/// `user_id` is stored as given; the service does not verify it refers to an
/// existing user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitFinancialData {
    /// Owning user id (opaque, unvalidated).
    pub user_id: String,
    /// Reported income.
    pub income: f64,
    /// Expense figures keyed by category.
    pub expenses: BTreeMap<String, f64>,
    /// Reported savings.
    pub savings: f64,
    /// Investment figures keyed by category.
    pub investments: BTreeMap<String, f64>,
}

/// Stored financial record as returned on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinancialRecordResponse {
    /// Server-generated record id.
    pub id: String,
    /// Owning user id.
    pub user_id: String,
    /// Reported income.
    pub income: f64,
    /// Expense figures keyed by category.
    pub expenses: BTreeMap<String, f64>,
    /// Reported savings.
    pub savings: f64,
    /// Investment figures keyed by category.
    pub investments: BTreeMap<String, f64>,
    /// Submission instant, RFC 3339.
    #[schema(example = "2026-08-29T12:00:00+00:00")]
    pub created_at: String,
}

impl From<FinancialRecord> for FinancialRecordResponse {
    fn from(record: FinancialRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            income: record.income,
            expenses: record.expenses,
            savings: record.savings,
            investments: record.investments,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Dashboard view: user profile, raw record (when present), aggregates, and
/// the static presentation stubs.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Owner of the dashboard.
    pub user: UserProfile,
    /// The stored record, absent when the user has not submitted figures.
    pub financial_summary: Option<FinancialRecordResponse>,
    /// Derived aggregates; zeroed when no record exists.
    pub summary: DashboardSummary,
    /// Badge label stub.
    #[schema(example = "gold")]
    pub badge_status: &'static str,
    /// Company rating stub.
    pub company_status: CompanyStatus,
}

/// Store financial figures for a user, replacing any previous submission.
#[utoipa::path(
    post,
    path = "/api/financial-data",
    request_body = SubmitFinancialData,
    responses(
        (status = 201, description = "Record stored", body = FinancialRecordResponse),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    ),
    tags = ["finance"],
    operation_id = "submitFinancialData"
)]
#[post("/financial-data")]
pub async fn submit_financial_data(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitFinancialData>,
) -> HttpResponse {
    let SubmitFinancialData {
        user_id,
        income,
        expenses,
        savings,
        investments,
    } = payload.into_inner();
    let record = FinancialRecord::new(user_id, income, expenses, savings, investments);
    let response = FinancialRecordResponse::from(record.clone());
    state.store.upsert_record(record);
    HttpResponse::Created().json(response)
}

/// Fetch the stored financial record for a user.
#[utoipa::path(
    get,
    path = "/api/financial-data/{user_id}",
    params(("user_id" = String, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "The stored record", body = FinancialRecordResponse),
        (status = 404, description = "No record for this user", body = ErrorBody)
    ),
    tags = ["finance"],
    operation_id = "getFinancialData"
)]
#[get("/financial-data/{user_id}")]
pub async fn get_financial_data(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<FinancialRecordResponse>> {
    state
        .store
        .record(&path)
        .map(|record| web::Json(record.into()))
        .ok_or_else(|| Error::not_found("Financial data not found"))
}

/// Aggregated dashboard for a user.
///
/// Users who exist but have not submitted figures get a zeroed summary and a
/// null `financial_summary` rather than a 404.
#[utoipa::path(
    get,
    path = "/api/dashboard/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Dashboard view", body = DashboardResponse),
        (status = 404, description = "Unknown user", body = ErrorBody)
    ),
    tags = ["finance"],
    operation_id = "getDashboard"
)]
#[get("/dashboard/{user_id}")]
pub async fn get_dashboard(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DashboardResponse>> {
    let user = state
        .store
        .user(&path)
        .ok_or_else(|| Error::not_found("User not found"))?;
    let record = state.store.record(&user.id);
    let summary = record
        .as_ref()
        .map(DashboardSummary::from_record)
        .unwrap_or_default();
    Ok(web::Json(DashboardResponse {
        user: UserProfile::from(&user),
        financial_summary: record.map(FinancialRecordResponse::from),
        summary,
        badge_status: state.presentation.badge_status,
        company_status: state.presentation.company_status,
    }))
}
