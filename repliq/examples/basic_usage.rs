//! Minimal end-to-end study: run, render, inspect one interval.
//!
//! Run with: `cargo run --example basic_usage`

use repliq::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    repliq::logging::init_study_logging();

    let mut config = StudyConfig::default();
    config.replications = 10;

    let report = run_study(&config)?;
    let mut stdout = std::io::stdout().lock();
    render_report(&report, &mut stdout)?;

    let system = report.metric(Metric::SystemTime);
    println!();
    println!(
        "mean time in system: {:.4} +/- {:.4} minutes over {} replications",
        system.mean, system.half_width, system.n
    );
    Ok(())
}
