use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{CandlestickPoint, CandlestickResponse, ChartDataResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "charts-api",
        version = "1.0.0",
        description = "Chart-data endpoints backing the dashboard's candlestick, line, bar and pie charts"
    ),
    paths(
        handlers::health::health,
        handlers::candlestick::candlestick,
        handlers::line_chart::line_chart,
        handlers::bar_chart::bar_chart,
        handlers::pie_chart::pie_chart
    ),
    components(
        schemas(
            CandlestickPoint,
            CandlestickResponse,
            ChartDataResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "charts", description = "Chart data endpoints")
    )
)]
pub struct ApiDoc;
