//! Currency commands: spot conversion and rate history.

use crate::display::{self, Output};
use anyhow::{Context, Result};
use findata_lib::prelude::*;

/// Convert `amount` from one currency into another at the spot rate.
pub(crate) async fn convert(
    client: &DataClient,
    amount: f64,
    from: &str,
    to: &str,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Quoting {from}/{to}"));
    let result = client.quote(from, to, amount).await;
    pb.finish_and_clear();
    let converted = result.with_context(|| format!("Failed to convert {from} to {to}"))?;

    match output {
        Output::Json => display::print_json(&serde_json::json!({
            "from": from.to_uppercase(),
            "to": to.to_uppercase(),
            "amount": amount,
            "converted": converted,
        })),
        Output::Table => {
            println!(
                "{amount} {} = {converted:.4} {}",
                from.to_uppercase(),
                to.to_uppercase()
            );
            Ok(())
        }
    }
}

/// Print the daily closing rate of a currency pair over `period`.
pub(crate) async fn history(
    client: &DataClient,
    from: &str,
    to: &str,
    period: Period,
    output: Output,
    quiet: bool,
) -> Result<()> {
    let pb = display::spinner(quiet, format!("Fetching {from}/{to} ({period})"));
    let result = client.currency_history(from, to, period).await;
    pb.finish_and_clear();
    let points = result.with_context(|| format!("Failed to fetch {from}/{to} history"))?;

    if let Output::Json = output {
        return display::print_json(&points);
    }

    if points.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    display::print_header(&[("DATE", 12), ("CLOSE", 12)]);
    for point in &points {
        println!("{:<12} {:>12.5}", point.date.to_string(), point.close);
    }
    display::print_total(points.len(), "days");
    Ok(())
}
