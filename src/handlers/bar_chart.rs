use crate::error::{ApiError, ErrorResponse};
use crate::models::ChartDataResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET bar-chart-data/ handler - daily traded volume for the bar chart
#[utoipa::path(
    get,
    path = routes::BAR_CHART_DATA,
    responses(
        (status = 200, description = "Daily volume series", body = ChartDataResponse),
        (status = 503, description = "No data loaded", body = ErrorResponse)
    ),
    tag = "charts"
)]
pub async fn bar_chart(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ChartDataResponse>), ApiError> {
    let bars = state.dataset.bars();
    if bars.is_empty() {
        return Err(ApiError::EmptyDataset("bar"));
    }

    let labels = bars
        .iter()
        .map(|bar| bar.date.format("%Y-%m-%d").to_string())
        .collect();
    let data = bars.iter().map(|bar| bar.volume).collect();

    tracing::debug!("Serving volume series with {} points", bars.len());
    Ok((StatusCode::OK, Json(ChartDataResponse { labels, data })))
}
