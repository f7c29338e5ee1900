use serde::{Deserialize, Serialize};

/// Side of an option contract, as the provider encodes it ("call"/"put").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

/// One row of an option chain as delivered by the data-fetch layer.
///
/// Only strike, expiration, type, open interest, and implied volatility feed
/// the analytics; the quote fields are carried through untouched for the
/// caller. Nullable columns stay `Option` so a sparse provider row still
/// deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainRow {
    pub strike: f64,

    /// ISO-8601 date string ("2025-02-14"). Absent on some providers.
    #[serde(default)]
    pub expiration: Option<String>,

    pub option_type: OptionType,

    #[serde(default)]
    pub open_interest: Option<f64>,

    #[serde(default)]
    pub implied_volatility: Option<f64>,

    // Quote fields, unused by the analytics, passed through.
    #[serde(default)]
    pub bid: Option<f64>,

    #[serde(default)]
    pub ask: Option<f64>,

    #[serde(default)]
    pub last_price: Option<f64>,

    #[serde(default)]
    pub volume: Option<f64>,
}

impl ChainRow {
    pub fn new(strike: f64, option_type: OptionType) -> Self {
        Self {
            strike,
            expiration: None,
            option_type,
            open_interest: None,
            implied_volatility: None,
            bid: None,
            ask: None,
            last_price: None,
            volume: None,
        }
    }
}
