//! Theme, stats, and explore handlers.
//!
//! ```text
//! GET  /api/theme
//! POST /api/theme
//! GET  /api/stats/{range}
//! GET  /api/explore/{section}
//! ```
//!
//! These endpoints serve mock payloads with no backing state: the theme POST
//! validates and echoes its input without persisting anything.

use actix_web::{get, post, web};

use crate::domain::Error;
use crate::domain::insights::{
    ExploreEntry, ExploreSection, StatsOverview, StatsRange, Theme, explore_entries,
    stats_overview,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;

/// Return the default theme preference.
#[utoipa::path(
    get,
    path = "/api/theme",
    responses((status = 200, description = "Current theme", body = Theme)),
    tags = ["insights"],
    operation_id = "getTheme"
)]
#[get("/theme")]
pub async fn get_theme() -> web::Json<Theme> {
    web::Json(Theme::default())
}

/// Accept a theme preference and echo it back.
#[utoipa::path(
    post,
    path = "/api/theme",
    request_body = Theme,
    responses(
        (status = 200, description = "Accepted theme", body = Theme),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    ),
    tags = ["insights"],
    operation_id = "setTheme"
)]
#[post("/theme")]
pub async fn set_theme(payload: web::Json<Theme>) -> web::Json<Theme> {
    web::Json(payload.into_inner())
}

/// Mock stats series for a time range.
#[utoipa::path(
    get,
    path = "/api/stats/{range}",
    params(("range" = String, Path, description = "One of 7d, 30d, 90d, 1y")),
    responses(
        (status = 200, description = "Stats series", body = StatsOverview),
        (status = 400, description = "Unsupported range", body = ErrorBody)
    ),
    tags = ["insights"],
    operation_id = "getStats"
)]
#[get("/stats/{range}")]
pub async fn get_stats(path: web::Path<String>) -> ApiResult<web::Json<StatsOverview>> {
    let raw = path.into_inner();
    let range = raw
        .parse::<StatsRange>()
        .map_err(|_| Error::invalid_request(format!("Unsupported stats range: {raw}")))?;
    Ok(web::Json(stats_overview(range)))
}

/// Static explore content for a section.
#[utoipa::path(
    get,
    path = "/api/explore/{section}",
    params(("section" = String, Path, description = "One of features, tools, insights")),
    responses(
        (status = 200, description = "Section entries", body = [ExploreEntry]),
        (status = 404, description = "Unknown section", body = ErrorBody)
    ),
    tags = ["insights"],
    operation_id = "getExploreSection"
)]
#[get("/explore/{section}")]
pub async fn get_explore(path: web::Path<String>) -> ApiResult<web::Json<Vec<ExploreEntry>>> {
    let section = path
        .parse::<ExploreSection>()
        .map_err(|_| Error::not_found("Explore section not found"))?;
    Ok(web::Json(explore_entries(section).to_vec()))
}
