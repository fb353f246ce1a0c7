//! List command implementation.
//!
//! Prints the mapping tables: the labels accepted on the command line and the
//! provider codes they resolve to.

use crate::display::{self, Output};
use anyhow::{Result, bail};
use findata_lib::prelude::*;
use serde::Serialize;

/// One row of a mapping table.
#[derive(Serialize)]
struct Entry {
    label: &'static str,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fred_series: Option<&'static str>,
}

impl Entry {
    fn of<T: CodeTable>(member: &T) -> Self {
        Self {
            label: member.label(),
            code: member.code(),
            name: None,
            fred_series: None,
        }
    }
}

fn table(kind: &str) -> Result<Vec<Entry>> {
    let entries = match kind.to_lowercase().as_str() {
        "currencies" | "currency" => Currency::all().iter().map(Entry::of).collect(),
        "indices" | "index" => StockIndex::all().iter().map(Entry::of).collect(),
        "metrics" | "metric" => EconomicMetric::all().iter().map(Entry::of).collect(),
        "countries" | "country" => Country::all()
            .iter()
            .map(|c| Entry {
                name: Some(c.name()),
                fred_series: Some(c.fred_series()),
                ..Entry::of(c)
            })
            .collect(),
        _ => bail!(
            "Unknown list: {}. Valid options: currencies, indices, countries, metrics",
            kind
        ),
    };
    Ok(entries)
}

fn print_table(title: &str, entries: &[Entry]) {
    println!("{title}");
    display::print_header(&[("LABEL", 24), ("CODE", 10), ("NAME", 16), ("FRED", 16)]);
    for entry in entries {
        println!(
            "{:<24} {:<10} {:<16} {}",
            entry.label,
            entry.code,
            entry.name.unwrap_or(""),
            entry.fred_series.unwrap_or("")
        );
    }
    display::print_total(entries.len(), "entries");
}

/// List one mapping table, or all of them when `kind` is `None`.
pub(crate) fn list(kind: Option<&str>, output: Output) -> Result<()> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => vec!["currencies", "indices", "countries", "metrics"],
    };

    let mut tables = Vec::with_capacity(kinds.len());
    for kind in kinds {
        tables.push((kind, table(kind)?));
    }

    match output {
        Output::Json => {
            let map: serde_json::Map<String, serde_json::Value> = tables
                .into_iter()
                .map(|(kind, entries)| -> Result<(String, serde_json::Value)> {
                    Ok((kind.to_lowercase(), serde_json::to_value(entries)?))
                })
                .collect::<Result<_>>()?;
            display::print_json(&map)
        }
        Output::Table => {
            for (i, (kind, entries)) in tables.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_table(&kind.to_uppercase(), entries);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_table_has_fred_series() {
        let entries = table("countries").unwrap();
        let us = entries.iter().find(|e| e.label == "US").unwrap();
        assert_eq!(us.code, "USA");
        assert_eq!(us.fred_series, Some("FEDFUNDS"));
    }

    #[test]
    fn test_unknown_table_is_error() {
        assert!(table("bonds").is_err());
        assert!(table("Indices").is_ok());
    }
}
