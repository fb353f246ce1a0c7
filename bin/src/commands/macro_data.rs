//! Macroeconomic commands: consumer prices, indicators and interest rates.

use crate::display::{self, Output};
use anyhow::{Context, Result};
use findata_lib::prelude::*;

/// Print the monthly consumer price index of a country.
pub(crate) async fn cpi(
    client: &DataClient,
    country: &str,
    years: YearSpan,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Fetching {country} CPI ({years})"));
    let result = client.price_index(country, years).await;
    pb.finish_and_clear();
    let points = result.with_context(|| format!("Failed to fetch CPI for {country}"))?;

    if let Output::Json = output {
        return display::print_json(&points);
    }

    if points.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    display::print_header(&[("PERIOD", 10), ("INDEX", 12)]);
    for point in &points {
        println!("{:<10} {:>12.3}", point.period, point.value);
    }
    display::print_total(points.len(), "observations");
    Ok(())
}

/// Print yearly values of an economic indicator.
pub(crate) async fn economic(
    client: &DataClient,
    metric: &str,
    country: &str,
    years: YearSpan,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Fetching {metric} for {country} ({years})"));
    let result = client.economic_indicator(metric, country, years).await;
    pb.finish_and_clear();
    let points = result.with_context(|| format!("Failed to fetch {metric} for {country}"))?;

    if let Output::Json = output {
        return display::print_json(&points);
    }

    if points.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    display::print_header(&[("YEAR", 6), ("VALUE", 14)]);
    for point in &points {
        println!("{:<6} {:>14.3}", point.year, point.value);
    }
    display::print_total(points.len(), "years");
    Ok(())
}

/// Print the benchmark interest rate of a country.
pub(crate) async fn rates(
    client: &DataClient,
    country: &str,
    years: YearSpan,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Fetching {country} rates ({years})"));
    let result = client.interest_rate(country, years).await;
    pb.finish_and_clear();
    let points = result.with_context(|| format!("Failed to fetch interest rates for {country}"))?;

    if let Output::Json = output {
        return display::print_json(&points);
    }

    if points.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    display::print_header(&[("DATE", 12), ("RATE (%)", 10)]);
    for point in &points {
        println!("{:<12} {:>10.2}", point.date.to_string(), point.value);
    }
    display::print_total(points.len(), "observations");
    Ok(())
}
