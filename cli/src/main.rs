use clap::Parser;
use gui::core::gui::run_gui;
use log::{info, LevelFilter};
use ringsim::core::handle_sim::{get_tick_duration, handle_sim};
use ringsim::core::simulation::{create_rng, Simulation};
use ringsim::pre::check_sim_opts_pars::check_sim_opts_pars;
use ringsim::pre::read_sim_pars::get_sim_pars;
use ringsim::pre::sim_opts::SimOpts;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments
    let sim_opts: SimOpts = SimOpts::parse();

    // set up logging (RUST_LOG overrides the level set by the debug flag)
    env_logger::Builder::new()
        .filter_level(if sim_opts.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    // read simulation parameters (built-in parameters if no file is given) and check them
    let sim_pars = get_sim_pars(sim_opts.parfile_path.as_deref())?;
    check_sim_opts_pars(&sim_opts, &sim_pars)?;

    // print simulation details
    info!(
        "Simulating {} cars on a ring of radius {:.1}px at {} ticks/s (real-time factor {:.2})",
        sim_pars.traffic_pars.no_cars,
        sim_pars.ring_pars.radius,
        sim_opts.tick_rate,
        sim_opts.realtime_factor
    );

    if let Some(seed) = sim_opts.seed {
        info!("Random number generator seeded with {}", seed);
    }

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();

    let sim_output = if sim_opts.headless {
        // HEADLESS CASE ---------------------------------------------------------------------------
        handle_sim(&sim_pars, &sim_opts)?
    } else {
        // GUI CASE --------------------------------------------------------------------------------
        // the simulation is driven by the frame loop of the GUI until the window is closed
        let sim = Simulation::new(
            &sim_pars.traffic_pars,
            &sim_pars.ring_pars,
            sim_pars.visual_pars.filenames.len(),
            create_rng(sim_opts.seed),
        )?;

        run_gui(
            sim,
            &sim_pars.visual_pars,
            get_tick_duration(sim_opts.tick_rate, sim_opts.realtime_factor),
        )?
    };

    info!(
        "Execution time (total): {}ms",
        t_start.elapsed().as_millis()
    );

    // POST-PROCESSING -----------------------------------------------------------------------------
    // write telemetry (exactly once, at the end of the simulation) and print results
    sim_output.post_process(&sim_opts.telemetry_path, &mut std::io::stdout())?;

    Ok(())
}
