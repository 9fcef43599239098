//! money-problem CLI - convert amounts and evaluate portfolios
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert with an ad-hoc rate
//! money-problem --rate EUR:USD:1.2 convert 10 EUR USD
//!
//! # Evaluate a portfolio with rates from a config file
//! money-problem --config rates.toml evaluate --to USD 5USD 10EUR
//!
//! # List configured rates
//! money-problem --rates-csv rates.csv rates
//! ```

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use money_problem::bank::Bank;
use money_problem::config::BankConfig;
use money_problem::conversion::ConversionResult;
use money_problem::currency::Currency;
use money_problem::money::Money;
use money_problem::portfolio::Portfolio;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// money-problem: multi-currency money calculator
#[derive(Parser)]
#[command(name = "money-problem")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert money and evaluate multi-currency portfolios", long_about = None)]
struct Cli {
    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Extra rate as FROM:TO:RATE, applied after the config
    #[arg(short, long = "rate", global = true, value_parser = parse_rate)]
    rates: Vec<(Currency, Currency, f64)>,

    /// CSV file of from,to,rate lines, applied after the config
    #[arg(long, global = true)]
    rates_csv: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        amount: f64,
        from: Currency,
        to: Currency,
    },

    /// Evaluate a portfolio in one currency
    Evaluate {
        /// Target currency
        #[arg(short, long)]
        to: Currency,

        /// Holdings such as 5USD or "10 EUR"
        #[arg(value_name = "MONEY", required = true)]
        moneys: Vec<Money>,
    },

    /// List the configured rates
    Rates,
}

fn parse_rate(s: &str) -> Result<(Currency, Currency, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("expected FROM:TO:RATE, got {}", s));
    }
    let from = parts[0].parse::<Currency>().map_err(|e| e.to_string())?;
    let to = parts[1].parse::<Currency>().map_err(|e| e.to_string())?;
    let rate = parts[2]
        .parse::<f64>()
        .map_err(|e| format!("invalid rate {}: {}", parts[2], e))?;
    Ok((from, to, rate))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".money-problem").join("config.toml"))
}

/// Explicit path must exist; the default location is optional
fn load_config(path: Option<&Path>) -> anyhow::Result<BankConfig> {
    if let Some(path) = path {
        return BankConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(default) if default.exists() => BankConfig::load(&default)
            .with_context(|| format!("Failed to load config {}", default.display())),
        _ => Ok(BankConfig::default()),
    }
}

fn build_bank(cli: &Cli) -> anyhow::Result<Bank> {
    let mut bank = load_config(cli.config.as_deref())?.to_bank();

    if let Some(ref csv_path) = cli.rates_csv {
        let csv = fs::read_to_string(csv_path)
            .with_context(|| format!("Failed to read {}", csv_path.display()))?;
        let count = bank.load_from_csv(&csv)?;
        log::info!("Loaded {} rates from {}", count, csv_path.display());
    }

    bank.add_exchange_rates(cli.rates.iter().copied());
    Ok(bank)
}

/// `RUST_LOG` still applies; `-v` raises the default to debug
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let bank = build_bank(cli)?;

    if cli.verbose {
        println!(
            "{} v{}",
            "money-problem".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("Rates loaded: {}", bank.num_rates().to_string().dimmed());
    }

    match cli.command {
        Commands::Convert { amount, from, to } => {
            let money = bank.try_convert(amount, from, to)?;
            print_money(&money, cli.json)
        }

        Commands::Evaluate { to, ref moneys } => {
            let total = evaluate(&bank, moneys, to)?;
            print_money(&total, cli.json)
        }

        Commands::Rates => {
            let rates = bank.rates();
            if cli.json {
                let rows: Vec<_> = rates
                    .iter()
                    .map(|(pair, rate)| (pair.from, pair.to, *rate))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rates.is_empty() {
                println!("{}", "No exchange rates configured".yellow());
            } else {
                println!("{}", "Exchange Rates".cyan().bold());
                println!("{}", "==============".cyan());
                for (pair, rate) in rates {
                    println!("  {:<10} {}", pair.to_string(), rate);
                }
            }
            Ok(())
        }
    }
}

fn evaluate(bank: &Bank, moneys: &[Money], to: Currency) -> anyhow::Result<Money> {
    let portfolio: Portfolio = moneys.iter().copied().collect();
    match portfolio.evaluate(bank, to) {
        ConversionResult::Success(total) => Ok(total),
        ConversionResult::Failure(message) => bail!(message),
    }
}

fn print_money(money: &Money, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(money)?);
    } else {
        println!("{}", money.to_string().green().bold());
    }
    Ok(())
}
