use serde::{Deserialize, Serialize};

/// One candlestick in the shape chartjs-chart-financial expects
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CandlestickPoint {
    /// Bar date, formatted YYYY-MM-DD
    pub x: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Response type for the candlestick endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CandlestickResponse {
    pub data: Vec<CandlestickPoint>,
}

/// Response type shared by the line, bar and pie chart endpoints:
/// parallel label/value arrays, ready to drop into a chart.js dataset
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChartDataResponse {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}
