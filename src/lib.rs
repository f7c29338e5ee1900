pub mod config;
pub mod error;
pub mod gex;
pub mod greeks;
pub mod logging;
pub mod models;
pub mod rules;

// Re-exports for convenience
pub use config::AnalyticsConfig;
pub use error::AnalyticsError;
pub use gex::{GexResult, StrikeGex, aggregate_gex, row_exposure};
pub use greeks::{Greeks, OptionContract, compute_greeks};
pub use models::{ChainRow, OptionType};
pub use rules::{ChainSummary, GammaRegime, call_wall, put_wall, summarize_chain};
