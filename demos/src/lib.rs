//! Shed demo suite.
//!
//! Small binaries that walk through the physics the shed utilities exist to
//! explain:
//!
//! - **demo-rabi**: Rabi flopping of an XY-driven qubit
//! - **demo-pi-pulse**: a resonant transmon π pulse, with leakage and
//!   measurement statistics
//! - **demo-bloch**: a state trajectory rendered as Bloch-figure JSON

use anyhow::{Result, ensure};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

/// Evenly spaced sample times from 0 to `duration` inclusive.
///
/// A grid needs at least two points for a nonzero step; fewer would
/// divide by `samples − 1` and hand the solver a NaN time.
pub fn sample_grid(duration: f64, samples: usize) -> Result<Vec<f64>> {
    ensure!(samples >= 2, "need at least 2 sample points, got {samples}");
    ensure!(
        duration > 0.0 && duration.is_finite(),
        "duration must be positive and finite, got {duration}"
    );
    let step = duration / (samples - 1) as f64;
    Ok((0..samples).map(|i| i as f64 * step).collect())
}

/// Initialize tracing from `RUST_LOG`, defaulting to quiet.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Render a population in [0, 1] as a fixed-width ASCII bar.
pub fn population_bar(p: f64, width: usize) -> String {
    let filled = (p.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_grid_spans_the_duration() {
        let grid = sample_grid(5.0, 26).unwrap();
        assert_eq!(grid.len(), 26);
        assert_eq!(grid[0], 0.0);
        assert!((grid[25] - 5.0).abs() < 1e-12);
        assert!(grid.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn sample_grid_rejects_degenerate_counts() {
        // Zero would underflow `samples − 1`; one would give an infinite
        // step and a NaN grid.
        assert!(sample_grid(5.0, 0).is_err());
        assert!(sample_grid(5.0, 1).is_err());
    }

    #[test]
    fn sample_grid_rejects_bad_durations() {
        assert!(sample_grid(0.0, 10).is_err());
        assert!(sample_grid(-1.0, 10).is_err());
        assert!(sample_grid(f64::INFINITY, 10).is_err());
    }
}
