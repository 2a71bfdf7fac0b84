use ballistic_sim::dynamics::state::gravity;
use ballistic_sim::sim::{simulate, Outcome, SimClock};
use ballistic_sim::{Ballistic, SimConfig, Vector3};

fn dropped_from(alt: f64) -> Ballistic {
    Ballistic::new(Vector3::new(0.0, 0.0, alt), Vector3::zeros(), gravity(9.81))
}

/// One second of free fall from 100 m matches the closed-form drop.
#[test]
fn free_fall_one_step() -> ballistic_sim::Result<()> {
    let mut body = dropped_from(100.0);
    body.update(1.0)?;
    let s = body.state();
    assert!((s.velocity().z() + 9.81).abs() < 1e-12);
    assert!((s.position().z() - 95.095).abs() < 1e-9);
    assert_eq!(s.acceleration(), Vector3::new(0.0, 0.0, -9.81));
    Ok(())
}

/// N ticks produce N+1 samples with strictly increasing, evenly spaced times.
#[test]
fn history_has_one_sample_per_tick() -> ballistic_sim::Result<()> {
    let dt = 0.05;
    let n = 40;
    let mut clock = SimClock::new(dt)?;
    clock.register("ball", dropped_from(1_000.0))?;
    for _ in 0..n {
        clock.advance()?;
    }

    let body = clock.get("ball").expect("registered");
    let states = body.states();
    assert_eq!(states.len(), n + 1);
    assert_eq!(states[0].time, 0.0);
    for pair in states.windows(2) {
        let step = pair[1].time - pair[0].time;
        assert!(step > 0.0);
        assert!((step - dt).abs() < 1e-9, "uneven step {step}");
    }
    assert!((states[n].time - clock.time()).abs() < 1e-12);
    Ok(())
}

/// A zero-length update changes nothing about the kinematic state.
#[test]
fn zero_step_is_idempotent() -> ballistic_sim::Result<()> {
    let mut body = Ballistic::new(
        Vector3::new(-100.0, 100.0, 100.0),
        Vector3::new(-12.5, 10.0, 0.0),
        gravity(9.8),
    );
    let before = *body.state();
    body.update(0.0)?;
    let after = *body.state();
    assert_eq!(before.position(), after.position());
    assert_eq!(before.velocity(), after.velocity());
    assert_eq!(before.acceleration(), after.acceleration());
    Ok(())
}

/// Gravity is the only force, so every sample carries the same acceleration.
#[test]
fn acceleration_constant_over_run() -> ballistic_sim::Result<()> {
    let config = SimConfig { dt: 0.01, max_time: 5.0 };
    let run = simulate(&config, vec![("ball".to_string(), dropped_from(200.0))])?;
    let body = run.get("ball").expect("registered");
    let a0 = body.states()[0].state.acceleration();
    assert!(body.states().iter().all(|s| s.state.acceleration() == a0));
    Ok(())
}

/// A 10 m drop at 0.1 s stops on the first sample at or below ground.
#[test]
fn drop_terminates_on_ground_contact() -> ballistic_sim::Result<()> {
    let dt = 0.1;
    let config = SimConfig { dt, max_time: 100.0 };
    let run = simulate(&config, vec![("ball".to_string(), dropped_from(10.0))])?;

    let bound = ((2.0 * 10.0 / 9.81_f64).sqrt() / dt).ceil() as usize;
    assert!(run.steps <= bound, "{} steps > bound {}", run.steps, bound);
    assert_eq!(run.outcome, Outcome::GroundContact { name: "ball".into() });

    let states = run.get("ball").expect("registered").states();
    let last = states[states.len() - 1];
    let prev = states[states.len() - 2];
    assert!(last.state.altitude() <= 0.0);
    assert!(prev.state.altitude() > 0.0);
    Ok(())
}

/// Two bodies share a time index but not their trajectories.
#[test]
fn bodies_are_independent() -> ballistic_sim::Result<()> {
    let config = SimConfig { dt: 0.1, max_time: 3.0 };
    let slow = Ballistic::new(Vector3::new(0.0, 0.0, 500.0), Vector3::new(1.0, 0.0, 0.0), gravity(9.81));
    let fast = Ballistic::new(Vector3::new(0.0, 0.0, 500.0), Vector3::new(20.0, 5.0, 3.0), gravity(9.81));
    let run = simulate(&config, vec![("slow".into(), slow), ("fast".into(), fast)])?;

    let a = run.get("slow").expect("registered").table();
    let b = run.get("fast").expect("registered").table();
    assert_eq!(a.index(), b.index());

    // Each matches its own solo run exactly
    let solo = simulate(
        &config,
        vec![(
            "slow".into(),
            Ballistic::new(Vector3::new(0.0, 0.0, 500.0), Vector3::new(1.0, 0.0, 0.0), gravity(9.81)),
        )],
    )?;
    assert_eq!(solo.get("slow").expect("registered").table(), a);
    assert_ne!(a.column("Position x [m]"), b.column("Position x [m]"));
    Ok(())
}

/// The demo returns both golf balls with matching, labeled tables.
#[test]
fn golf_ball_demo_tables() -> ballistic_sim::Result<()> {
    let (one, two) = ballistic_sim::run(&SimConfig::default())?;
    let (t1, t2) = (one.table(), two.table());
    assert_eq!(t1.len(), t2.len());
    assert_eq!(t1.columns()[9], "Acceleration z [m/s^2]");
    assert_eq!(t1.rows()[0].position_z, 15.0);
    assert_eq!(t2.rows()[0].position_x, -100.0);
    assert!(t1.rows().last().map_or(false, |r| r.position_z <= 0.0));
    Ok(())
}
