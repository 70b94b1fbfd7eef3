//! Bloch Trajectory Demo
//!
//! Evolves a driven qubit and emits the trajectory as Bloch-figure JSON,
//! ready for a 3-D plotting frontend.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use shed_bloch::{BlochFigure, bloch_vector};
use shed_control::pulse::evolve_xy_driven_qubit;
use shed_demos::{
    init_tracing, print_header, print_result, print_section, print_success, sample_grid,
};

#[derive(Parser, Debug)]
#[command(name = "demo-bloch")]
#[command(about = "Render a driven-qubit trajectory as Bloch-figure JSON")]
struct Args {
    /// Rabi frequency
    #[arg(short, long, default_value = "0.1")]
    rabi_freq: f64,

    /// Total evolution time
    #[arg(short, long, default_value = "5.0")]
    duration: f64,

    /// Number of trajectory points
    #[arg(short, long, default_value = "51")]
    samples: usize,

    /// Write the figure JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    print_header("Bloch Trajectory Demo");
    print_section("Trajectory Setup");
    print_result("Rabi frequency", args.rabi_freq);
    print_result("Duration", args.duration);
    print_result("Samples", args.samples);

    let times = sample_grid(args.duration, args.samples)?;
    let result = evolve_xy_driven_qubit(&times, 0.0, args.rabi_freq, 0.0, 0.0)?;

    let mut fig = BlochFigure::new();
    for state in result.states() {
        fig.add_vector(&bloch_vector(state)?);
    }

    let json = fig.to_json()?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("writing figure to {}", path.display()))?;
            print_success(&format!(
                "wrote {} vectors to {}",
                fig.num_vectors(),
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
