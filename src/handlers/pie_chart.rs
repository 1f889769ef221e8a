use crate::error::{ApiError, ErrorResponse};
use crate::models::ChartDataResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET pie-chart-data/ handler - sector allocation for the pie chart
///
/// Labels are sector names, data the allocation weights in percent.
#[utoipa::path(
    get,
    path = routes::PIE_CHART_DATA,
    responses(
        (status = 200, description = "Sector allocation", body = ChartDataResponse),
        (status = 503, description = "No data loaded", body = ErrorResponse)
    ),
    tag = "charts"
)]
pub async fn pie_chart(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ChartDataResponse>), ApiError> {
    let sectors = state.dataset.sectors();
    if sectors.is_empty() {
        return Err(ApiError::EmptyDataset("pie"));
    }

    let labels = sectors.iter().map(|s| s.sector.clone()).collect();
    let data = sectors.iter().map(|s| s.weight).collect();

    tracing::debug!("Serving sector allocation with {} slices", sectors.len());
    Ok((StatusCode::OK, Json(ChartDataResponse { labels, data })))
}
