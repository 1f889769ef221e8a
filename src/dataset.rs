use chrono::NaiveDate;

/// One daily OHLC bar of the dashboard's market summary series.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// One slice of the portfolio's sector allocation, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSlice {
    pub sector: String,
    pub weight: f64,
}

/// Read-only dataset backing the chart endpoints.
///
/// Built once at startup and shared through `AppState`; nothing mutates it
/// for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Dataset {
    bars: Vec<DailyBar>,
    sectors: Vec<SectorSlice>,
}

// (year, month, day, open, high, low, close, volume)
const DEMO_BARS: [(i32, u32, u32, f64, f64, f64, f64, f64); 16] = [
    (2024, 1, 2, 142.30, 144.80, 141.10, 144.25, 1_820_400.0),
    (2024, 1, 3, 144.25, 145.60, 142.90, 143.10, 1_534_200.0),
    (2024, 1, 4, 143.10, 146.75, 143.00, 146.40, 2_105_800.0),
    (2024, 1, 5, 146.40, 147.20, 144.55, 145.05, 1_760_300.0),
    (2024, 1, 8, 145.05, 148.90, 144.80, 148.35, 2_391_100.0),
    (2024, 1, 9, 148.35, 149.10, 146.20, 146.85, 1_648_700.0),
    (2024, 1, 10, 146.85, 147.95, 145.30, 147.60, 1_402_900.0),
    (2024, 1, 11, 147.60, 151.40, 147.25, 150.90, 2_874_600.0),
    (2024, 1, 12, 150.90, 152.30, 149.65, 150.20, 2_210_500.0),
    (2024, 1, 16, 150.20, 150.75, 147.10, 147.95, 1_985_200.0),
    (2024, 1, 17, 147.95, 149.40, 146.50, 149.15, 1_511_800.0),
    (2024, 1, 18, 149.15, 153.20, 148.90, 152.75, 3_042_700.0),
    (2024, 1, 19, 152.75, 154.10, 151.60, 153.50, 2_466_900.0),
    (2024, 1, 22, 153.50, 153.85, 150.40, 151.05, 1_874_100.0),
    (2024, 1, 23, 151.05, 152.95, 150.70, 152.60, 1_690_300.0),
    (2024, 1, 24, 152.60, 155.45, 152.20, 155.10, 2_758_000.0),
];

const DEMO_SECTORS: [(&str, f64); 6] = [
    ("Technology", 34.0),
    ("Financials", 21.5),
    ("Healthcare", 15.0),
    ("Energy", 11.5),
    ("Consumer", 10.0),
    ("Industrials", 8.0),
];

impl Dataset {
    /// Builds the demo dataset the service ships with.
    pub fn demo() -> Self {
        let bars = DEMO_BARS
            .iter()
            .map(|&(y, m, d, open, high, low, close, volume)| DailyBar {
                // All dates in DEMO_BARS are valid calendar dates
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                open,
                high,
                low,
                close,
                volume,
            })
            .collect();

        let sectors = DEMO_SECTORS
            .iter()
            .map(|&(sector, weight)| SectorSlice {
                sector: sector.to_string(),
                weight,
            })
            .collect();

        Dataset { bars, sectors }
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn sectors(&self) -> &[SectorSlice] {
        &self.sectors
    }
}
