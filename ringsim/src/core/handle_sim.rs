use crate::core::simulation::{create_rng, Simulation};
use crate::post::sim_result::SimOutput;
use crate::pre::read_sim_pars::SimPars;
use crate::pre::sim_opts::SimOpts;
use log::{info, warn};
use rand::Rng;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// handle_sim creates a simulation on the basis of the inserted parameters, simulates it without
/// GUI for no_ticks ticks, and returns the results and the telemetry for post-processing.
pub fn handle_sim(sim_pars: &SimPars, sim_opts: &SimOpts) -> anyhow::Result<SimOutput> {
    // create the simulation (car visuals are assigned but never loaded in a headless run)
    let mut sim = Simulation::new(
        &sim_pars.traffic_pars,
        &sim_pars.ring_pars,
        sim_pars.visual_pars.filenames.len(),
        create_rng(sim_opts.seed),
    )?;

    // simulate the ticks, paced in real time if indicated
    let tick_duration = if sim_opts.realtime {
        Some(get_tick_duration(
            sim_opts.tick_rate,
            sim_opts.realtime_factor,
        ))
    } else {
        None
    };

    run_ticks(&mut sim, sim_opts.no_ticks, sim_opts.tick_rate, tick_duration);

    Ok(sim.finish())
}

/// get_tick_duration returns the real time one tick takes at the inserted tick rate.
pub fn get_tick_duration(tick_rate: u32, realtime_factor: f64) -> Duration {
    Duration::from_secs_f64(1.0 / (tick_rate as f64 * realtime_factor))
}

/// run_ticks simulates no_ticks ticks. If a tick duration is inserted, the loop sleeps after every
/// tick such that the tick is finished in real time as well.
pub fn run_ticks<R: Rng>(
    sim: &mut Simulation<R>,
    no_ticks: u64,
    tick_rate: u32,
    tick_duration: Option<Duration>,
) {
    let t_start_total = Instant::now();

    for _ in 0..no_ticks {
        let t_start = Instant::now();

        // simulate tick
        sim.simulate_tick();

        if let Some(tick_duration) = tick_duration {
            // print status (once per simulated second)
            if sim.cur_tick % tick_rate as u64 == 0 {
                info!(
                    "Simulating... Current tick is {}, mean speed is {:.3}deg/tick",
                    sim.cur_tick,
                    sim.get_mean_speed()
                );
            }

            // sleep until the tick is finished in real time as well
            match tick_duration.checked_sub(t_start.elapsed()) {
                Some(t_sleep) if !t_sleep.is_zero() => sleep(t_sleep),
                _ => warn!("Could not keep up with real-time!"),
            }
        }
    }

    info!(
        "Simulated {} ticks in {}ms",
        no_ticks,
        t_start_total.elapsed().as_millis()
    );
}
