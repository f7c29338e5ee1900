use crate::config::{DAYS_PER_YEAR, MIN_TIME_TO_EXPIRY_YEARS};
use crate::error::AnalyticsError;
use crate::models::OptionType;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

/// Standard normal distribution for CDF calculations.
fn std_normal() -> Normal {
    Normal::new(0.0, 1.0).unwrap()
}

/// Standard normal PDF: φ(x) = (1/√(2π)) * e^(-x²/2)
fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF: Φ(x)
fn norm_cdf(x: f64) -> f64 {
    std_normal().cdf(x)
}

/// Inputs for a single Black-Scholes Greeks evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptionContract {
    /// Current spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiration in years (e.g., 30 days = 30/365)
    pub time_to_expiry: f64,
    /// Risk-free interest rate (annualized, e.g., 0.05 for 5%)
    pub risk_free_rate: f64,
    /// Implied volatility (annualized, e.g., 0.20 for 20%)
    pub iv: f64,
    /// Option type
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        iv: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            iv,
            option_type,
        }
    }
}

/// First-order sensitivities of an option's theoretical price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂V/∂S, roughly in [-1, 1]
    pub delta: f64,
    /// ∂²V/∂S², non-negative
    pub gamma: f64,
    /// ∂V/∂t, per calendar day
    pub theta: f64,
    /// ∂V/∂σ, per 1% volatility point
    pub vega: f64,
}

/// Closed-form Black-Scholes Greeks for a single contract.
///
/// Non-positive spot, strike, or volatility are hard errors. A non-positive
/// time-to-expiry is floored at [`MIN_TIME_TO_EXPIRY_YEARS`] instead, which
/// keeps expiry-day contracts evaluable; treat that result as an
/// approximation, not an exact expiry-day value.
///
/// Pure and deterministic: no I/O, identical inputs give identical outputs.
pub fn compute_greeks(contract: &OptionContract) -> Result<Greeks, AnalyticsError> {
    let s = contract.spot;
    let k = contract.strike;
    let r = contract.risk_free_rate;
    let sigma = contract.iv;

    if !s.is_finite() || s <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "spot must be positive, got {}",
            s
        )));
    }
    if !k.is_finite() || k <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "strike must be positive, got {}",
            k
        )));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "implied volatility must be positive, got {}",
            sigma
        )));
    }

    let t = if contract.time_to_expiry <= 0.0 {
        MIN_TIME_TO_EXPIRY_YEARS
    } else {
        contract.time_to_expiry
    };
    let sqrt_t = t.sqrt();

    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;
    let pdf_d1 = norm_pdf(d1);
    let discount = (-r * t).exp();

    let (delta, theta_annual) = match contract.option_type {
        OptionType::Call => (
            norm_cdf(d1),
            -s * pdf_d1 * sigma / (2.0 * sqrt_t) - r * k * discount * norm_cdf(d2),
        ),
        OptionType::Put => (
            norm_cdf(d1) - 1.0,
            -s * pdf_d1 * sigma / (2.0 * sqrt_t) + r * k * discount * norm_cdf(-d2),
        ),
    };

    Ok(Greeks {
        delta,
        gamma: pdf_d1 / (s * sigma * sqrt_t),
        theta: theta_annual / DAYS_PER_YEAR,
        vega: s * pdf_d1 * sqrt_t / 100.0,
    })
}
