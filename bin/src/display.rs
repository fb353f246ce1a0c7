//! Display utilities and output formatting for the findata CLI.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// How command results are printed to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Output {
    Table,
    Json,
}

/// Starts a spinner on stderr while a request is in flight.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Pretty-prints a value as JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a header row and its underline.
pub(crate) fn print_header(columns: &[(&str, usize)]) {
    let mut line = String::new();
    let mut width = 0;
    for (name, w) in columns {
        line.push_str(&format!("{name:<w$} "));
        width += w + 1;
    }
    println!("{}", line.trim_end());
    println!("{}", "-".repeat(width.saturating_sub(1)));
}

/// Prints the row count footer.
pub(crate) fn print_total(count: usize, noun: &str) {
    println!("\nTotal: {count} {noun}");
}

/// Rounds a price to cents for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(415.456), 415.46);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_quiet_spinner_is_hidden() {
        assert!(spinner(true, "fetching".to_string()).is_hidden());
    }
}
