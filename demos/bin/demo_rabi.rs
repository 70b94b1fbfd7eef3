//! Rabi Flopping Demo
//!
//! Drives a qubit with an XY pulse and watches the excited-state population
//! oscillate. Run with `--qubit-freq 0 --drive-freq 0` (the default) to sit
//! in the rotating frame, or give both a matching nonzero frequency to see
//! the same physics in the lab frame.

use anyhow::Result;
use clap::Parser;

use shed_bloch::bloch_vector;
use shed_control::pulse::evolve_xy_driven_qubit;
use shed_demos::{
    init_tracing, population_bar, print_header, print_result, print_section, sample_grid,
};

#[derive(Parser, Debug)]
#[command(name = "demo-rabi")]
#[command(about = "Demonstrate Rabi flopping of an XY-driven qubit")]
struct Args {
    /// Qubit frequency (0 = rotating frame)
    #[arg(long, default_value = "0.0")]
    qubit_freq: f64,

    /// Rabi frequency
    #[arg(short, long, default_value = "0.1")]
    rabi_freq: f64,

    /// Drive frequency
    #[arg(long, default_value = "0.0")]
    drive_freq: f64,

    /// Drive phase, in cycles
    #[arg(long, default_value = "0.0")]
    drive_phase: f64,

    /// Total evolution time
    #[arg(short, long, default_value = "5.0")]
    duration: f64,

    /// Number of sample points
    #[arg(short, long, default_value = "26")]
    samples: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    print_header("Rabi Flopping Demo");

    print_section("Pulse Setup");
    print_result("Qubit frequency", args.qubit_freq);
    print_result("Rabi frequency", args.rabi_freq);
    print_result("Drive frequency", args.drive_freq);
    print_result("Drive phase", format!("{} cycles", args.drive_phase));
    print_result("Duration", args.duration);

    let times = sample_grid(args.duration, args.samples)?;

    let result = evolve_xy_driven_qubit(
        &times,
        args.qubit_freq,
        args.rabi_freq,
        args.drive_freq,
        args.drive_phase,
    )?;

    print_section("Excited-state Population");
    let p1 = result.population(1)?;
    for (t, p) in result.times().iter().zip(&p1) {
        println!("  t = {t:6.2}  |1⟩ {} {p:.4}", population_bar(*p, 30));
    }

    print_section("Final Bloch Vector");
    let v = bloch_vector(result.final_state())?;
    print_result("x", format!("{:+.4}", v.x));
    print_result("y", format!("{:+.4}", v.y));
    print_result("z", format!("{:+.4}", v.z));

    Ok(())
}
