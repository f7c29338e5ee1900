use anyhow::{Context, Result, bail};
use chrono::Local;
use colored::Colorize;
use gex_analyzer::{
    AnalyticsConfig, ChainRow, OptionContract, OptionType, compute_greeks, logging,
    summarize_chain,
};

fn main() -> Result<()> {
    logging::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("analyze") => run_analyze(&args[1..]),
        Some("greeks") => run_greeks(&args[1..]),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("{}", "GEX Analyzer".green().bold());
    println!();
    println!("Usage:");
    println!("  gex-analyzer analyze <chain.json> <spot>");
    println!("  gex-analyzer greeks <spot> <strike> <days> <rate> <iv> <call|put>");
}

/// Load a JSON option chain and print the GEX summary
fn run_analyze(args: &[String]) -> Result<()> {
    if args.len() != 2 {
        bail!("usage: gex-analyzer analyze <chain.json> <spot>");
    }
    let path = &args[0];
    let spot: f64 = args[1].parse().context("spot must be a number")?;

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read chain file '{}'", path))?;
    let rows: Vec<ChainRow> =
        serde_json::from_str(&raw).context("chain file is not a JSON array of chain rows")?;

    println!("{}", "=".repeat(60).blue());
    println!("{}", "GEX Analyzer".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!();
    println!("{} Loaded {} chain rows", "✓".green(), rows.len());
    println!("{} Spot: ${:.2}", "ℹ".blue(), spot);
    println!();

    let today = Local::now().date_naive();
    let config = AnalyticsConfig::default();
    let summary = summarize_chain(&rows, spot, today, &config)?;

    println!("{}", "Summary".cyan().bold());
    println!("{}", "=".repeat(60).blue());
    println!("  Net GEX:      ${:.2}M", summary.gex.net_gex / 1e6);
    match summary.gex.zero_gamma_strike {
        Some(strike) => println!("  Zero Gamma:   ${:.2}", strike),
        None => println!("  Zero Gamma:   n/a"),
    }
    match summary.regime {
        Some(regime) => {
            let label = format!("{} Gamma", regime);
            let colored_label = match regime {
                gex_analyzer::GammaRegime::Positive => label.green(),
                gex_analyzer::GammaRegime::Negative => label.red(),
            };
            println!("  Regime:       {}", colored_label);
        }
        None => println!("  Regime:       n/a"),
    }
    match summary.call_wall {
        Some(strike) => println!("  Call Wall:    ${:.2}", strike),
        None => println!("  Call Wall:    n/a"),
    }
    match summary.put_wall {
        Some(strike) => println!("  Put Wall:     ${:.2}", strike),
        None => println!("  Put Wall:     n/a"),
    }
    println!();

    if summary.gex.skipped_rows > 0 {
        println!(
            "{} Skipped {} malformed rows (zero contribution)",
            "⚠".yellow(),
            summary.gex.skipped_rows
        );
    }
    if summary.low_confidence {
        println!(
            "{} Chain carries no open interest; levels are not meaningful",
            "⚠".yellow()
        );
    }

    println!("{}", "Per-strike profile ($M)".cyan());
    for level in &summary.gex.per_strike {
        println!(
            "  {:>10.2} → {:>12.3}  (cum {:>12.3})",
            level.strike,
            level.gex / 1e6,
            level.cumulative / 1e6
        );
    }

    Ok(())
}

/// One-shot Greeks calculator
fn run_greeks(args: &[String]) -> Result<()> {
    if args.len() != 6 {
        bail!("usage: gex-analyzer greeks <spot> <strike> <days> <rate> <iv> <call|put>");
    }
    let spot: f64 = args[0].parse().context("spot must be a number")?;
    let strike: f64 = args[1].parse().context("strike must be a number")?;
    let days: f64 = args[2].parse().context("days must be a number")?;
    let rate: f64 = args[3].parse().context("rate must be a number")?;
    let iv: f64 = args[4].parse().context("iv must be a number")?;
    let option_type = match args[5].as_str() {
        "call" => OptionType::Call,
        "put" => OptionType::Put,
        other => bail!("option type must be 'call' or 'put', got '{}'", other),
    };

    let contract = OptionContract::new(spot, strike, days / 365.0, rate, iv, option_type);
    let greeks = compute_greeks(&contract)?;

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Greeks Calculator".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!("  Delta: {:>10.4}", greeks.delta);
    println!("  Gamma: {:>10.6}", greeks.gamma);
    println!("  Theta: {:>10.4}", greeks.theta);
    println!("  Vega:  {:>10.4}", greeks.vega);

    Ok(())
}
