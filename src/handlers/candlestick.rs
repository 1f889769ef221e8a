use crate::error::{ApiError, ErrorResponse};
use crate::models::{CandlestickPoint, CandlestickResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET candlestick-data/ handler - OHLC series for the candlestick chart
///
/// Serves the daily bars of the dashboard's market summary series in the
/// `{x, open, high, low, close}` point format the financial chart plugin
/// consumes.
#[utoipa::path(
    get,
    path = routes::CANDLESTICK_DATA,
    responses(
        (status = 200, description = "Candlestick series", body = CandlestickResponse),
        (status = 503, description = "No data loaded", body = ErrorResponse)
    ),
    tag = "charts"
)]
pub async fn candlestick(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CandlestickResponse>), ApiError> {
    let bars = state.dataset.bars();
    if bars.is_empty() {
        return Err(ApiError::EmptyDataset("candlestick"));
    }

    let data = bars
        .iter()
        .map(|bar| CandlestickPoint {
            x: bar.date.format("%Y-%m-%d").to_string(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
        })
        .collect();

    tracing::debug!("Serving candlestick series with {} bars", bars.len());
    Ok((StatusCode::OK, Json(CandlestickResponse { data })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{chart_request, test_app};
    use axum::routing::get;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_candlestick_endpoint() {
        let app = test_app(routes::CANDLESTICK_DATA, get(candlestick));

        let response = app
            .oneshot(chart_request(routes::CANDLESTICK_DATA))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: CandlestickResponse = serde_json::from_slice(&body).unwrap();

        assert!(!response_json.data.is_empty());
        let first = &response_json.data[0];
        assert_eq!(first.x, "2024-01-02");
        assert_eq!(first.open, 142.30);
        assert_eq!(first.high, 144.80);
        assert_eq!(first.low, 141.10);
        assert_eq!(first.close, 144.25);
    }

    #[tokio::test]
    async fn test_candlestick_points_are_coherent() {
        let app = test_app(routes::CANDLESTICK_DATA, get(candlestick));

        let response = app
            .oneshot(chart_request(routes::CANDLESTICK_DATA))
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: CandlestickResponse = serde_json::from_slice(&body).unwrap();

        for point in &response_json.data {
            assert!(point.high >= point.low, "{} has high < low", point.x);
            assert!(point.high >= point.open && point.high >= point.close);
            assert!(point.low <= point.open && point.low <= point.close);
        }
    }
}
