//! Equity commands: price history and index membership.

use crate::display::{self, Output, round2};
use anyhow::{Context, Result};
use findata_lib::prelude::*;

/// Print daily OHLCV bars for a ticker or index name.
pub(crate) async fn equity(
    client: &DataClient,
    symbol: &str,
    period: Period,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Fetching {symbol} ({period})"));
    let result = client.equity_history(symbol, period).await;
    pb.finish_and_clear();
    let bars = result.with_context(|| format!("Failed to fetch history for {symbol}"))?;

    if let Output::Json = output {
        return display::print_json(&bars);
    }

    if bars.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    display::print_header(&[
        ("DATE", 12),
        ("OPEN", 10),
        ("HIGH", 10),
        ("LOW", 10),
        ("CLOSE", 10),
        ("VOLUME", 14),
    ]);
    for bar in &bars {
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>10} {:>14}",
            bar.date.to_string(),
            round2(bar.open),
            round2(bar.high),
            round2(bar.low),
            round2(bar.close),
            bar.volume
        );
    }
    display::print_total(bars.len(), "bars");
    Ok(())
}

/// Print the current members of a stock index.
pub(crate) async fn constituents(
    client: &DataClient,
    index: &str,
    tickers_only: bool,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Scraping {index} members"));

    if tickers_only {
        let result = client.index_tickers(index).await;
        pb.finish_and_clear();
        let tickers = result.with_context(|| format!("Failed to scrape {index} tickers"))?;
        return match output {
            Output::Json => display::print_json(&tickers),
            Output::Table => {
                for ticker in &tickers {
                    println!("{ticker}");
                }
                Ok(())
            }
        };
    }

    let result = client.constituents(index).await;
    pb.finish_and_clear();
    let members = result.with_context(|| format!("Failed to scrape {index} members"))?;

    if let Output::Json = output {
        return display::print_json(&members);
    }

    if members.is_empty() {
        println!("No constituents found.");
        return Ok(());
    }

    display::print_header(&[("TICKER", 10), ("NAME", 40)]);
    for member in &members {
        println!("{:<10} {}", member.ticker, member.name);
    }
    display::print_total(members.len(), "constituents");
    Ok(())
}
