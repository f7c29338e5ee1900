use crate::config::{AnalyticsConfig, DAYS_PER_YEAR, PCT_MOVE_SCALE};
use crate::error::AnalyticsError;
use crate::greeks::{OptionContract, compute_greeks};
use crate::models::{ChainRow, OptionType};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Signed gamma exposure at one strike, plus the running total up to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeGex {
    pub strike: f64,
    /// Signed exposure in notional currency units (calls +, puts -)
    pub gex: f64,
    /// Cumulative signed exposure, ascending by strike
    pub cumulative: f64,
}

/// Result of aggregating one option chain. Computed fresh per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GexResult {
    /// Per-strike signed exposure, sorted ascending by strike
    pub per_strike: Vec<StrikeGex>,
    pub net_gex: f64,
    /// Strike where the cumulative profile is closest to zero
    pub zero_gamma_strike: Option<f64>,
    /// Rows dropped for malformed fields; they contributed zero exposure
    pub skipped_rows: usize,
    /// Sum of open interest across the input rows; zero means the
    /// zero-gamma level is economically meaningless
    pub total_open_interest: f64,
}

/// Resolve a row's time-to-expiry in years relative to `today`.
fn years_to_expiry(
    row: &ChainRow,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> Result<f64, AnalyticsError> {
    match &row.expiration {
        None => Ok(config.fallback_days_to_expiry as f64 / DAYS_PER_YEAR),
        Some(raw) => {
            let expiry = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                AnalyticsError::MissingField(format!(
                    "expiration '{}' is not an ISO date: {}",
                    raw, e
                ))
            })?;
            let days = (expiry - today).num_days() as f64;
            Ok((days / DAYS_PER_YEAR).max(config.min_time_to_expiry))
        }
    }
}

/// Signed gamma exposure of a single chain row.
///
/// Missing open interest counts as zero contracts; missing or non-positive
/// implied volatility falls back to `config.fallback_iv`. Put exposure is
/// negated (dealer hedging flow from puts is treated as opposite sign to
/// calls).
pub fn row_exposure(
    row: &ChainRow,
    spot: f64,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> Result<f64, AnalyticsError> {
    if !row.strike.is_finite() || row.strike <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "strike must be positive, got {}",
            row.strike
        )));
    }

    let time_to_expiry = years_to_expiry(row, today, config)?;
    let iv = match row.implied_volatility {
        Some(v) if v > 0.0 => v,
        _ => config.fallback_iv,
    };
    let open_interest = row.open_interest.unwrap_or(0.0).max(0.0);

    let greeks = compute_greeks(&OptionContract::new(
        spot,
        row.strike,
        time_to_expiry,
        config.risk_free_rate,
        iv,
        row.option_type,
    ))?;

    let exposure = greeks.gamma * open_interest * spot * spot * config.contract_size * PCT_MOVE_SCALE;

    Ok(match row.option_type {
        OptionType::Call => exposure,
        OptionType::Put => -exposure,
    })
}

/// Strike whose cumulative signed exposure is closest to zero; ties resolve
/// to the first occurrence in ascending-strike order. A scan, not an
/// interpolation between strikes.
fn zero_gamma_strike(per_strike: &[StrikeGex]) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for level in per_strike {
        let magnitude = level.cumulative.abs();
        match best {
            Some((current, _)) if magnitude >= current => {}
            _ => best = Some((magnitude, level.strike)),
        }
    }
    best.map(|(_, strike)| strike)
}

/// Aggregate per-row gamma exposure into a per-strike profile.
///
/// Rows that fail to compute are logged and contribute zero exposure; one
/// malformed row never aborts the rest of the chain. Rows are independent,
/// so the per-row map runs in parallel.
pub fn aggregate_gex(
    rows: &[ChainRow],
    spot: f64,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> Result<GexResult, AnalyticsError> {
    if rows.is_empty() {
        return Err(AnalyticsError::NoData);
    }
    if !spot.is_finite() || spot <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "spot must be positive, got {}",
            spot
        )));
    }

    let contributions: Vec<(f64, f64, bool)> = rows
        .par_iter()
        .map(|row| match row_exposure(row, spot, today, config) {
            Ok(gex) => (row.strike, gex, false),
            Err(e) => {
                warn!(strike = row.strike, error = %e, "skipping chain row in GEX aggregation");
                (row.strike, 0.0, true)
            }
        })
        .collect();

    let skipped_rows = contributions.iter().filter(|(_, _, skipped)| *skipped).count();
    let total_open_interest: f64 = rows.iter().filter_map(|row| row.open_interest).sum();

    // Group signed exposures by strike, ascending
    let mut sorted = contributions;
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut per_strike: Vec<StrikeGex> = Vec::new();
    for (strike, gex, _) in sorted {
        match per_strike.last_mut() {
            Some(last) if last.strike == strike => last.gex += gex,
            _ => per_strike.push(StrikeGex {
                strike,
                gex,
                cumulative: 0.0,
            }),
        }
    }

    let mut running = 0.0;
    for level in &mut per_strike {
        running += level.gex;
        level.cumulative = running;
    }

    Ok(GexResult {
        zero_gamma_strike: zero_gamma_strike(&per_strike),
        net_gex: running,
        per_strike,
        skipped_rows,
        total_open_interest,
    })
}
