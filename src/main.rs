use ballistic_sim::io::csv;
use ballistic_sim::io::json::{self, FlightSummary};
use ballistic_sim::sim::event::{self, ApogeeDetector, EventDetector, EventKind, GroundContact};
use ballistic_sim::sim::{self, presets, Outcome};
use ballistic_sim::{Result, SimConfig};

fn main() {
    // info+ by default; RUST_LOG overrides (e.g. RUST_LOG=trace for every tick)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = SimConfig::default();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let result = sim::simulate(&config, presets::golf_balls())?;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  BALLISTIC SIMULATION — {} bodies", result.bodies.len());
    println!("====================================================================");
    println!();
    println!(
        "  Clock:  dt={} s   max_time={} s   steps={}   t={:.2} s",
        config.dt, config.max_time, result.steps, result.time
    );
    match &result.outcome {
        Outcome::MaxTime => println!("  Stop:   max time reached"),
        Outcome::GroundContact { name } => println!("  Stop:   {} reached the ground", name),
    }
    println!();

    for (name, body) in &result.bodies {
        let history = body.states();
        let summary = FlightSummary::from_history(history)?;

        println!("  {}", name);
        println!("  ──────────────────────────────────────────────────────────────────");
        println!("  Initial:  {}", history[0].state);
        println!("  Final:    {}", body.state());

        let mut apogee = ApogeeDetector;
        let mut ground = GroundContact::default();
        let mut detectors: [&mut dyn EventDetector; 2] = [&mut apogee, &mut ground];
        for ev in event::scan(history, &mut detectors) {
            let label = match ev.kind {
                EventKind::Apogee => "APOGEE",
                EventKind::GroundContact => "GROUND",
            };
            println!(
                "  {:<8} t={:>6.2}s   alt={:>8.2}m   vel={:>7.2}m/s",
                label,
                ev.time,
                ev.sample.state.altitude(),
                ev.sample.state.velocity().norm()
            );
        }
        println!(
            "  Max altitude: {:>8.2} m   Downrange: {:>8.2} m   Samples: {}",
            summary.apogee_m, summary.downrange_m, summary.samples
        );
        println!();

        let csv_path = format!("{}_states.csv", name);
        let json_path = format!("{}_summary.json", name);
        csv::write_table_file(&csv_path, &body.table())?;
        json::write_summary_file(&json_path, name, &summary)?;
        println!("  Exported: {}, {}", csv_path, json_path);
        println!();
    }

    println!("====================================================================");
    println!();
    Ok(())
}
