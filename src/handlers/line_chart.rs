use crate::error::{ApiError, ErrorResponse};
use crate::models::ChartDataResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET line-chart-data/ handler - closing prices for the line chart
///
/// Labels are the bar dates, data the corresponding closes.
#[utoipa::path(
    get,
    path = routes::LINE_CHART_DATA,
    responses(
        (status = 200, description = "Closing price series", body = ChartDataResponse),
        (status = 503, description = "No data loaded", body = ErrorResponse)
    ),
    tag = "charts"
)]
pub async fn line_chart(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ChartDataResponse>), ApiError> {
    let bars = state.dataset.bars();
    if bars.is_empty() {
        return Err(ApiError::EmptyDataset("line"));
    }

    let labels = bars
        .iter()
        .map(|bar| bar.date.format("%Y-%m-%d").to_string())
        .collect();
    let data = bars.iter().map(|bar| bar.close).collect();

    tracing::debug!("Serving closing price series with {} points", bars.len());
    Ok((StatusCode::OK, Json(ChartDataResponse { labels, data })))
}
