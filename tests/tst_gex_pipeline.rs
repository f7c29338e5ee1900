use approx::assert_relative_eq;
use chrono::NaiveDate;
use gex_analyzer::{
    AnalyticsConfig, AnalyticsError, ChainRow, OptionContract, OptionType, aggregate_gex,
    compute_greeks, summarize_chain,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn row(strike: f64, option_type: OptionType, oi: f64, iv: f64) -> ChainRow {
    let mut row = ChainRow::new(strike, option_type);
    row.expiration = Some("2025-02-14".to_string()); // 30 days after today()
    row.open_interest = Some(oi);
    row.implied_volatility = Some(iv);
    row
}

#[test]
fn test_end_to_end_two_row_chain() {
    // ATM call (1000 OI) and put (800 OI), same strike and expiry, spot = 100.
    // Call and put gamma coincide at identical parameters, so the net is
    // gamma * spot^2 * contract_size * 0.01 * (1000 - 800).
    let rows = vec![
        row(100.0, OptionType::Call, 1000.0, 0.25),
        row(100.0, OptionType::Put, 800.0, 0.25),
    ];
    let config = AnalyticsConfig::default();
    let result = aggregate_gex(&rows, 100.0, today(), &config).unwrap();

    let gamma = compute_greeks(&OptionContract::new(
        100.0,
        100.0,
        30.0 / 365.0,
        config.risk_free_rate,
        0.25,
        OptionType::Call,
    ))
    .unwrap()
    .gamma;
    let expected = gamma * 100.0 * 100.0 * config.contract_size * 0.01 * (1000.0 - 800.0);

    assert_relative_eq!(result.net_gex, expected, epsilon = 1e-9);
    assert_eq!(result.per_strike.len(), 1);
    assert_eq!(result.zero_gamma_strike, Some(100.0));
    assert_eq!(result.skipped_rows, 0);
}

#[test]
fn test_sparse_row_does_not_poison_the_chain() {
    // A row with null IV and null OI must contribute zero, not abort.
    let mut sparse = ChainRow::new(100.0, OptionType::Put);
    sparse.expiration = Some("2025-02-14".to_string());

    let solid = vec![
        row(95.0, OptionType::Put, 400.0, 0.30),
        row(105.0, OptionType::Call, 600.0, 0.22),
    ];
    let mut with_sparse = solid.clone();
    with_sparse.push(sparse);

    let config = AnalyticsConfig::default();
    let baseline = aggregate_gex(&solid, 100.0, today(), &config).unwrap();
    let padded = aggregate_gex(&with_sparse, 100.0, today(), &config).unwrap();

    assert_relative_eq!(baseline.net_gex, padded.net_gex, epsilon = 1e-9);
    assert_eq!(padded.skipped_rows, 0);
}

#[test]
fn test_chain_rows_parse_from_provider_json() {
    // Snake_case provider columns, extra fields tolerated, nullable IV/OI.
    let raw = r#"[
        {"strike": 95.0, "expiration": "2025-02-14", "option_type": "put",
         "open_interest": 800, "implied_volatility": 0.28,
         "bid": 1.10, "ask": 1.20, "volume": 321},
        {"strike": 100.0, "expiration": "2025-02-14", "option_type": "call",
         "open_interest": 1000, "implied_volatility": 0.25},
        {"strike": 105.0, "option_type": "call",
         "open_interest": null, "implied_volatility": null}
    ]"#;
    let rows: Vec<ChainRow> = serde_json::from_str(raw).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].option_type, OptionType::Put);
    assert_eq!(rows[2].open_interest, None);

    let summary =
        summarize_chain(&rows, 100.0, today(), &AnalyticsConfig::default()).unwrap();
    assert!(!summary.low_confidence);
    assert_eq!(summary.call_wall, Some(100.0));
    assert_eq!(summary.put_wall, Some(95.0));
    assert_eq!(summary.gex.per_strike.len(), 3);
}

#[test]
fn test_empty_chain_surfaces_no_data() {
    let err = summarize_chain(&[], 100.0, today(), &AnalyticsConfig::default()).unwrap_err();
    assert_eq!(err, AnalyticsError::NoData);
}

#[test]
fn test_regime_follows_spot_against_zero_gamma() {
    // Heavy calls below spot drag the zero-gamma level under it
    let rows = vec![
        row(90.0, OptionType::Call, 2000.0, 0.25),
        row(95.0, OptionType::Call, 1500.0, 0.25),
        row(110.0, OptionType::Put, 100.0, 0.25),
    ];
    let summary =
        summarize_chain(&rows, 100.0, today(), &AnalyticsConfig::default()).unwrap();

    let zero_gamma = summary.gex.zero_gamma_strike.unwrap();
    let expected = if summary.spot > zero_gamma {
        gex_analyzer::GammaRegime::Positive
    } else {
        gex_analyzer::GammaRegime::Negative
    };
    assert_eq!(summary.regime, Some(expected));
}

#[test]
fn test_aggregation_is_deterministic() {
    let rows: Vec<ChainRow> = (0..50)
        .map(|i| {
            let strike = 80.0 + i as f64;
            let side = if i % 2 == 0 { OptionType::Call } else { OptionType::Put };
            row(strike, side, 100.0 + i as f64 * 10.0, 0.20 + i as f64 * 0.001)
        })
        .collect();

    let config = AnalyticsConfig::default();
    let first = aggregate_gex(&rows, 102.5, today(), &config).unwrap();
    let second = aggregate_gex(&rows, 102.5, today(), &config).unwrap();
    assert_eq!(first, second);
}
