//! Chart and window navigation handlers.

use axum::{Extension, extract::Query, response::Json};
use serde::Deserialize;
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::{
    analytics::{ChartView, Selection, WindowInfo},
    errors::AppError,
    metrics::Metric,
    store::SharedStore,
    window::{self, Direction, Granularity, TimeWindow},
};

/// Chart selection query parameters.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    /// Metric to chart (default: distance)
    #[serde(default)]
    pub metric: Metric,
    /// Window size (default: week)
    #[serde(default)]
    pub granularity: Granularity,
    /// RFC 3339 end of the window (default: now)
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub reference: Option<OffsetDateTime>,
}

/// Window navigation request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveWindowRequest {
    pub granularity: Granularity,
    #[serde(with = "time::serde::rfc3339")]
    pub reference_date: OffsetDateTime,
    pub direction: Direction,
}

/// Chart points, baseline and summary statistics for a selection.
#[utoipa::path(
    get,
    path = "/analytics",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Chart view for the selection", body = ChartView)
    )
)]
pub async fn get_analytics(
    Extension(store): Extension<SharedStore>,
    Query(params): Query<AnalyticsQuery>,
) -> Result<Json<ChartView>, AppError> {
    let now = OffsetDateTime::now_utc();
    let window = TimeWindow::new(params.granularity, params.reference.unwrap_or(now));
    let selection = Selection::new(params.metric, window);

    let runs = store.fetch_all().await?;
    Ok(Json(ChartView::build(&runs, &selection, now)))
}

/// Step a window backward or forward by its granularity.
///
/// Forward moves are refused once the window already reaches the present.
#[utoipa::path(
    post,
    path = "/analytics/window/move",
    tag = "analytics",
    request_body = MoveWindowRequest,
    responses(
        (status = 200, description = "The moved window", body = WindowInfo),
        (status = 400, description = "Window already ends at the present")
    )
)]
pub async fn move_window(
    Json(req): Json<MoveWindowRequest>,
) -> Result<Json<WindowInfo>, AppError> {
    let now = OffsetDateTime::now_utc();
    let current = TimeWindow::new(req.granularity, req.reference_date);

    if req.direction == Direction::Forward && !window::can_move_forward(&current, now) {
        return Err(AppError::InvalidInput(
            "Window already ends at the present".to_string(),
        ));
    }

    let moved = window::move_window(current, req.direction);
    Ok(Json(WindowInfo::new(&moved, now)))
}
