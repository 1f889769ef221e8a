// Route path constants - single source of truth for all API paths

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const CANDLESTICK_DATA: &str = "/candlestick-data/";
pub const LINE_CHART_DATA: &str = "/line-chart-data/";
pub const BAR_CHART_DATA: &str = "/bar-chart-data/";
pub const PIE_CHART_DATA: &str = "/pie-chart-data/";

/// One entry of the chart route table: a literal path and the name used
/// for reverse lookup of that path elsewhere in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
}

/// The chart route table, in registration order. Names are unique.
pub const ROUTES: [Route; 4] = [
    Route {
        name: "candlestick-data",
        path: CANDLESTICK_DATA,
    },
    Route {
        name: "line-chart-data",
        path: LINE_CHART_DATA,
    },
    Route {
        name: "bar-chart-data",
        path: BAR_CHART_DATA,
    },
    Route {
        name: "pie-chart-data",
        path: PIE_CHART_DATA,
    },
];

/// Looks up a route path by its symbolic name.
pub fn reverse(name: &str) -> Option<&'static str> {
    ROUTES.iter().find(|r| r.name == name).map(|r| r.path)
}

/// Router for the charts feature area, one GET endpoint per chart type.
/// The application nests this under its base path; anything else is
/// axum's default 404.
pub fn charts_router() -> Router<AppState> {
    Router::new()
        .route(CANDLESTICK_DATA, get(handlers::candlestick))
        .route(LINE_CHART_DATA, get(handlers::line_chart))
        .route(BAR_CHART_DATA, get(handlers::bar_chart))
        .route(PIE_CHART_DATA, get(handlers::pie_chart))
}
