use serde::{Deserialize, Serialize};

// -----------------------------------------------
// DAY COUNT
// -----------------------------------------------
pub const DAYS_PER_YEAR: f64 = 365.0;

// Floor applied when a contract is at or past expiry. Keeps near-expiry
// contracts evaluable at the cost of accuracy on expiry day itself.
pub const MIN_TIME_TO_EXPIRY_YEARS: f64 = 0.001;

// -----------------------------------------------
// CHAIN FALLBACKS
// -----------------------------------------------
pub const FALLBACK_IMPLIED_VOL: f64 = 0.30;
pub const FALLBACK_DAYS_TO_EXPIRY: i64 = 30;

// -----------------------------------------------
// GEX SCALING
// -----------------------------------------------
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;
pub const DEFAULT_CONTRACT_SIZE: f64 = 100.0;

// Rescales dollar gamma to a 1%-move sensitivity convention.
pub const PCT_MOVE_SCALE: f64 = 0.01;

/// Tunables for a single aggregation request.
///
/// The risk-free rate is a field here rather than a constant in the
/// computation path, so callers can thread their own curve point through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub risk_free_rate: f64,
    pub contract_size: f64,
    pub fallback_iv: f64,
    pub fallback_days_to_expiry: i64,
    pub min_time_to_expiry: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            contract_size: DEFAULT_CONTRACT_SIZE,
            fallback_iv: FALLBACK_IMPLIED_VOL,
            fallback_days_to_expiry: FALLBACK_DAYS_TO_EXPIRY,
            min_time_to_expiry: MIN_TIME_TO_EXPIRY_YEARS,
        }
    }
}

impl AnalyticsConfig {
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    pub fn with_contract_size(mut self, size: f64) -> Self {
        self.contract_size = size;
        self
    }
}
