//! findata CLI - Currency, equity and macroeconomic data fetcher.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Args, CommandFactory, Parser, Subcommand};
use findata_lib::prelude::*;

mod commands;
mod display;
mod logging;

use display::Output;

#[derive(Parser)]
#[command(name = "findata")]
#[command(about = "Currency, equity and macroeconomic data fetcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    keys: KeyArgs,
}

/// Provider API keys, read from the environment or a `.env` file.
#[derive(Args)]
struct KeyArgs {
    /// API key for yfapi.net (spot quotes)
    #[arg(long, env = "YFAPI_API_KEY", hide_env_values = true, default_value = "", global = true)]
    yfapi_key: String,

    /// API key for eodhd.com (currency and equity history)
    #[arg(long, env = "EODHD_API_KEY", hide_env_values = true, default_value = "", global = true)]
    eodhd_key: String,

    /// API key for FRED (interest rates)
    #[arg(long, env = "FRED_API_KEY", hide_env_values = true, default_value = "", global = true)]
    fred_key: String,
}

/// Inclusive year window for annual and monthly series.
#[derive(Args)]
struct YearArgs {
    /// First year (YYYY)
    #[arg(short, long)]
    start: String,

    /// Last year (YYYY). Defaults to the current year.
    #[arg(short, long)]
    end: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between currencies at the spot rate
    Convert {
        /// Amount to convert
        amount: f64,

        /// Source currency (e.g., EUR)
        from: String,

        /// Target currency (e.g., USD)
        to: String,
    },

    /// Daily exchange-rate history for a currency pair
    FxHistory {
        /// Base currency (e.g., EUR)
        from: String,

        /// Quote currency (e.g., USD)
        to: String,

        /// Window: 1D, 1M, 3M, YTD, 1Y (anything else means 30 days)
        #[arg(short, long, default_value = "1M")]
        period: String,
    },

    /// Daily price history for a ticker or index name
    Equity {
        /// Ticker (e.g., AAPL.US) or index name (e.g., "S&P 500")
        symbol: String,

        /// Window: 1D, 1M, 3M, YTD, 1Y (anything else means 30 days)
        #[arg(short, long, default_value = "1M")]
        period: String,
    },

    /// Monthly consumer price index for a country
    Cpi {
        /// Country code (GB, US, FR, DE, JP)
        country: String,

        #[command(flatten)]
        years: YearArgs,
    },

    /// Yearly economic indicator for a country
    Economic {
        /// Indicator name (e.g., "Nominal GDP", "Unemployment Rate")
        metric: String,

        /// Country code (GB, US, FR, DE, JP)
        country: String,

        #[command(flatten)]
        years: YearArgs,
    },

    /// Benchmark interest rate for a country
    Rates {
        /// Country code (GB, US, FR, DE, JP)
        country: String,

        #[command(flatten)]
        years: YearArgs,
    },

    /// Current members of a stock index
    Constituents {
        /// Index name (e.g., "S&P 500", DAX)
        index: String,

        /// Print tickers only
        #[arg(long)]
        tickers_only: bool,
    },

    /// List supported currencies, indices, countries and indicators
    List {
        /// What to list (currencies, indices, countries, metrics); all if omitted
        kind: Option<String>,
    },
}

impl YearArgs {
    fn span(&self) -> Result<YearSpan> {
        let end = match &self.end {
            Some(end) => end.clone(),
            None => chrono::Local::now().year().to_string(),
        };
        YearSpan::parse(&self.start, &end)
            .with_context(|| format!("Invalid year range: {} to {end}", self.start))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let output = if cli.json { Output::Json } else { Output::Table };
    let quiet = cli.quiet;
    let keys = ApiKeys::new(cli.keys.yfapi_key, cli.keys.eodhd_key, cli.keys.fred_key);
    tracing::debug!(?keys, "Resolved API keys");
    let client = || DataClient::with_keys(keys.clone()).context("Failed to create HTTP client");

    match command {
        Commands::List { kind } => commands::list::list(kind.as_deref(), output),
        Commands::Convert { amount, from, to } => {
            commands::fx::convert(&client()?, amount, &from, &to, output, quiet).await
        }
        Commands::FxHistory { from, to, period } => {
            let period = Period::from_label(&period);
            commands::fx::history(&client()?, &from, &to, period, output, quiet).await
        }
        Commands::Equity { symbol, period } => {
            let period = Period::from_label(&period);
            commands::market::equity(&client()?, &symbol, period, output, quiet).await
        }
        Commands::Cpi { country, years } => {
            let years = years.span()?;
            commands::macro_data::cpi(&client()?, &country, years, output, quiet).await
        }
        Commands::Economic {
            metric,
            country,
            years,
        } => {
            let years = years.span()?;
            commands::macro_data::economic(&client()?, &metric, &country, years, output, quiet)
                .await
        }
        Commands::Rates { country, years } => {
            let years = years.span()?;
            commands::macro_data::rates(&client()?, &country, years, output, quiet).await
        }
        Commands::Constituents {
            index,
            tickers_only,
        } => {
            commands::market::constituents(&client()?, &index, tickers_only, output, quiet).await
        }
    }
}
