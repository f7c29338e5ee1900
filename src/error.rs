use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Non-positive price, strike, or volatility handed to the Greeks
    /// evaluator. Indicates a caller bug, never corrected silently.
    InvalidInput(String),
    /// A chain row field that could not be resolved. Recoverable: the row
    /// contributes zero exposure and aggregation continues.
    MissingField(String),
    /// Empty chain input; surfaced so the caller can render an empty state
    /// instead of a misleading zero-gamma level.
    NoData,
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalyticsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalyticsError::MissingField(msg) => write!(f, "Missing field: {}", msg),
            AnalyticsError::NoData => write!(f, "No option chain rows to aggregate"),
        }
    }
}

impl std::error::Error for AnalyticsError {}
