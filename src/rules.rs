use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::gex::{GexResult, aggregate_gex};
use crate::models::{ChainRow, OptionType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic label for the hedging environment implied by the cumulative
/// gamma profile. Not a rigorous dealer-positioning inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GammaRegime {
    /// Spot above the zero-gamma strike: hedging flow dampens moves
    Positive,
    /// Spot at or below the zero-gamma strike: hedging flow amplifies moves
    Negative,
}

impl fmt::Display for GammaRegime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GammaRegime::Positive => write!(f, "Positive"),
            GammaRegime::Negative => write!(f, "Negative"),
        }
    }
}

pub fn classify_regime(spot: f64, zero_gamma_strike: f64) -> GammaRegime {
    if spot > zero_gamma_strike {
        GammaRegime::Positive
    } else {
        GammaRegime::Negative
    }
}

/// Strike carrying the largest call open interest, if any side has OI.
/// Ties resolve to the first row encountered.
pub fn call_wall(rows: &[ChainRow]) -> Option<f64> {
    max_oi_strike(rows, OptionType::Call)
}

/// Strike carrying the largest put open interest.
pub fn put_wall(rows: &[ChainRow]) -> Option<f64> {
    max_oi_strike(rows, OptionType::Put)
}

fn max_oi_strike(rows: &[ChainRow], side: OptionType) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for row in rows {
        if row.option_type != side {
            continue;
        }
        let oi = row.open_interest.unwrap_or(0.0);
        if oi <= 0.0 {
            continue;
        }
        match best {
            Some((current, _)) if oi <= current => {}
            _ => best = Some((oi, row.strike)),
        }
    }
    best.map(|(_, strike)| strike)
}

/// Chain-level readout combining the GEX profile with derived signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSummary {
    pub spot: f64,
    pub regime: Option<GammaRegime>,
    pub call_wall: Option<f64>,
    pub put_wall: Option<f64>,
    /// Set when the chain carries no open interest at all; the zero-gamma
    /// level is still reported but is economically meaningless
    pub low_confidence: bool,
    pub gex: GexResult,
}

/// Run the full pipeline on one chain: per-row exposure, per-strike
/// reduction, regime classification, and OI walls.
pub fn summarize_chain(
    rows: &[ChainRow],
    spot: f64,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> Result<ChainSummary, AnalyticsError> {
    let gex = aggregate_gex(rows, spot, today, config)?;
    let regime = gex
        .zero_gamma_strike
        .map(|strike| classify_regime(spot, strike));
    let low_confidence = gex.total_open_interest <= 0.0;

    Ok(ChainSummary {
        spot,
        regime,
        call_wall: call_wall(rows),
        put_wall: put_wall(rows),
        low_confidence,
        gex,
    })
}
