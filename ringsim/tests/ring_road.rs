//! Tests that run complete headless simulations of the ring road.

use clap::Parser;
use ringsim::core::handle_sim::{get_tick_duration, handle_sim, run_ticks};
use ringsim::core::simulation::{create_rng, Simulation};
use ringsim::post::telemetry::TelemetryRecorder;
use ringsim::pre::check_sim_opts_pars::check_sim_opts_pars;
use ringsim::pre::read_sim_pars::SimPars;
use ringsim::pre::sim_opts::SimOpts;
use std::fs;

fn get_headless_opts(no_ticks: u64, seed: u64) -> SimOpts {
    SimOpts::parse_from([
        "ringsim".to_string(),
        "--headless".to_string(),
        "--no-ticks".to_string(),
        no_ticks.to_string(),
        "--seed".to_string(),
        seed.to_string(),
    ])
}

/// Test that a headless run records one row per car and tick and that the rows survive a trip
/// through the CSV file.
#[test]
fn headless_run_writes_complete_telemetry() {
    let sim_pars = SimPars::default();
    let sim_opts = get_headless_opts(600, 21);
    check_sim_opts_pars(&sim_opts, &sim_pars).unwrap();

    let output = handle_sim(&sim_pars, &sim_opts).unwrap();
    assert_eq!(output.result.no_ticks, 600);
    assert_eq!(output.result.car_results.len(), 10);
    assert_eq!(output.telemetry.len(), 6000);

    let filepath = std::env::temp_dir().join(format!(
        "ringsim_integration_{}.csv",
        std::process::id()
    ));
    output.telemetry.flush(&filepath).unwrap();
    let telemetry = TelemetryRecorder::from_csv(&filepath).unwrap();
    fs::remove_file(&filepath).unwrap();

    assert_eq!(telemetry.records(), output.telemetry.records());
}

/// Test that the angle and speed invariants hold over a long run.
#[test]
fn invariants_hold_over_long_run() {
    let sim_pars = SimPars::default();
    let output = handle_sim(&sim_pars, &get_headless_opts(3000, 22)).unwrap();

    for record in output.telemetry.records().iter() {
        assert!(0.0 <= record.angle && record.angle < 360.0);
        assert!(record.speed > 0.0);

        let r = (record.x - 500.0).hypot(record.y - 500.0);
        assert!((r - 400.0).abs() < 1e-9);
    }
}

/// Test that two runs with the same seed are identical and runs with different seeds are not.
#[test]
fn seeded_runs_are_reproducible() {
    let sim_pars = SimPars::default();
    let output_1 = handle_sim(&sim_pars, &get_headless_opts(900, 23)).unwrap();
    let output_2 = handle_sim(&sim_pars, &get_headless_opts(900, 23)).unwrap();
    let output_3 = handle_sim(&sim_pars, &get_headless_opts(900, 24)).unwrap();

    assert_eq!(output_1.telemetry.records(), output_2.telemetry.records());
    assert_ne!(output_1.telemetry.records(), output_3.telemetry.records());
}

/// Test that a paced run simulates the inserted number of ticks.
#[test]
fn paced_run_simulates_all_ticks() {
    let sim_pars = SimPars::default();
    let mut sim = Simulation::new(
        &sim_pars.traffic_pars,
        &sim_pars.ring_pars,
        1,
        create_rng(Some(25)),
    )
    .unwrap();

    let tick_duration = get_tick_duration(1000, 1.0);
    assert!((tick_duration.as_secs_f64() - 0.001).abs() < 1e-9);

    run_ticks(&mut sim, 20, 1000, Some(tick_duration));
    assert_eq!(sim.cur_tick, 20);
    assert_eq!(sim.telemetry.len(), 200);
}
