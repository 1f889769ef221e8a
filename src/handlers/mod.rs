pub mod bar_chart;
pub mod candlestick;
pub mod health;
pub mod line_chart;
pub mod pie_chart;

pub use bar_chart::bar_chart;
pub use candlestick::candlestick;
pub use health::health;
pub use line_chart::line_chart;
pub use pie_chart::pie_chart;
