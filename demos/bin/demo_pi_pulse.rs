//! Transmon π-Pulse Demo
//!
//! Drives a ten-level transmon on resonance for exactly a π pulse, then
//! reports the level populations, the leakage outside the qubit subspace,
//! and simulated measurement statistics.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use shed_control::pulse::simulate_pi_pulse;
use shed_demos::{
    create_progress_bar, init_tracing, population_bar, print_header, print_result, print_section,
    print_success, sample_grid,
};
use shed_quant::measure::sample_counts;

#[derive(Parser, Debug)]
#[command(name = "demo-pi-pulse")]
#[command(about = "Demonstrate a resonant π pulse on a transmon, leakage included")]
struct Args {
    /// Transmon anharmonicity (should be negative)
    #[arg(short, long, default_value = "-0.3", allow_hyphen_values = true)]
    anharm: f64,

    /// Rabi frequency (drive strength)
    #[arg(short, long, default_value = "0.05")]
    rabi_freq: f64,

    /// Drive phase, in radians
    #[arg(long, default_value = "0.0")]
    drive_phase: f64,

    /// Number of measurement shots on the final state
    #[arg(short, long, default_value = "1024")]
    shots: u64,

    /// RNG seed for the measurement shots
    #[arg(long, default_value = "1")]
    seed: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    print_header("Transmon π-Pulse Demo");

    let t_pi = 1.0 / (2.0 * args.rabi_freq);
    print_section("Pulse Setup");
    print_result("Anharmonicity", args.anharm);
    print_result("Rabi frequency", args.rabi_freq);
    print_result("π-pulse duration", format!("{t_pi:.2}"));
    print_result("Rabi/anharm ratio", format!("{:.3}", args.rabi_freq / args.anharm.abs()));

    let times = sample_grid(t_pi, 101)?;

    let pb = create_progress_bar(1, "integrating Schrödinger evolution");
    let result = simulate_pi_pulse(args.anharm, args.rabi_freq, &times, args.drive_phase)?;
    pb.finish_and_clear();

    let last = result.final_state();

    print_section("Final Level Populations");
    for level in 0..4 {
        let p = last.population(level)?;
        println!("  |{level}⟩ {} {p:.5}", population_bar(p, 30));
    }
    let leakage = 1.0 - last.population(0)? - last.population(1)?;
    print_result("Leakage outside qubit subspace", format!("{leakage:.2e}"));

    print_section("Measurement Statistics");
    let mut rng = StdRng::seed_from_u64(args.seed);
    let counts = sample_counts(last, args.shots, &mut rng)?;
    let mut outcomes: Vec<_> = counts.into_iter().collect();
    outcomes.sort_by_key(|(level, _)| *level);
    for (level, n) in outcomes {
        print_result(
            &format!("|{level}⟩"),
            format!("{n} / {} shots", args.shots),
        );
    }

    print_success("π pulse complete");
    Ok(())
}
