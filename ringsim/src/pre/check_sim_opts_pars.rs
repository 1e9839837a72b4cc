use crate::core::ring::RingPars;
use crate::core::simulation::{TrafficPars, MIN_NO_CARS};
use crate::interfaces::gui_interface::{SceneColors, VisualPars};
use crate::pre::read_sim_pars::SimPars;
use crate::pre::sim_opts::SimOpts;
use anyhow::Context;
use helpers::general::InputValueError;
use log::warn;

/// check_sim_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_sim_opts_pars(sim_opts: &SimOpts, sim_pars: &SimPars) -> anyhow::Result<()> {
    check_sim_opts(sim_opts)?;
    check_ring_pars(&sim_pars.ring_pars)?;
    check_traffic_pars(&sim_pars.traffic_pars)?;
    check_visual_pars(&sim_pars.visual_pars)?;
    Ok(())
}

/// check_sim_opts checks the command line options.
pub fn check_sim_opts(sim_opts: &SimOpts) -> anyhow::Result<()> {
    if !(1 <= sim_opts.tick_rate && sim_opts.tick_rate <= 1000) {
        return Err(InputValueError).context(format!(
            "tick_rate is {} ticks/s, which is not within the reasonable range of [1, 1000]!",
            sim_opts.tick_rate
        ));
    }

    if !(0.1 <= sim_opts.realtime_factor && sim_opts.realtime_factor <= 100.0) {
        return Err(InputValueError).context(format!(
            "realtime_factor is {:.3}, which is not within the reasonable range of [0.1, 100.0]!",
            sim_opts.realtime_factor
        ));
    }

    if sim_opts.headless && sim_opts.no_ticks < 1 {
        return Err(InputValueError)
            .context("no_ticks must be at least equal to one in case of a headless run!");
    }

    Ok(())
}

/// check_ring_pars checks the geometry of the ring.
pub fn check_ring_pars(ring_pars: &RingPars) -> anyhow::Result<()> {
    if ring_pars.width < 1 || ring_pars.height < 1 {
        return Err(InputValueError).context(format!(
            "The scene size must be positive, but is {}x{}px!",
            ring_pars.width, ring_pars.height
        ));
    }

    if !(ring_pars.radius > 0.0) {
        return Err(InputValueError).context(format!(
            "radius must be positive, but is {:.3}px!",
            ring_pars.radius
        ));
    }

    if !(0.0 <= ring_pars.road_half_width && ring_pars.road_half_width < ring_pars.radius) {
        return Err(InputValueError)
            .context("road_half_width is not within the required range [0.0, radius)!");
    }

    // a road that does not fit into the scene is drawn partly off-screen but does not affect the
    // simulation
    let max_radius = ring_pars.width.min(ring_pars.height) as f64 / 2.0;

    if ring_pars.radius + ring_pars.road_half_width > max_radius {
        warn!(
            "The road (outer radius {:.1}px) does not fit into the {}x{}px scene!",
            ring_pars.radius + ring_pars.road_half_width,
            ring_pars.width,
            ring_pars.height
        );
    }

    Ok(())
}

/// check_traffic_pars checks the roster and the speed policies.
pub fn check_traffic_pars(traffic_pars: &TrafficPars) -> anyhow::Result<()> {
    // CARS ----------------------------------------------------------------------------------------
    if traffic_pars.no_cars < MIN_NO_CARS {
        return Err(InputValueError).context(format!(
            "no_cars is {}, but at least {} cars are required to select disjoint slow and fast \
            cars!",
            traffic_pars.no_cars, MIN_NO_CARS
        ));
    }

    if [
        traffic_pars.normal_speed,
        traffic_pars.slow_speed,
        traffic_pars.fast_speed,
        traffic_pars.min_speed,
    ]
    .iter()
    .any(|speed| !speed.is_finite())
    {
        return Err(InputValueError).context("All speeds must be finite numbers!");
    }

    if !(traffic_pars.collision_distance > 0.0) {
        return Err(InputValueError).context(format!(
            "collision_distance must be positive, but is {:.3}px!",
            traffic_pars.collision_distance
        ));
    }

    // FLUCTUATION ---------------------------------------------------------------------------------
    if !(traffic_pars.min_fluctuation.is_finite()
        && traffic_pars.max_fluctuation.is_finite()
        && traffic_pars.min_fluctuation <= traffic_pars.max_fluctuation)
    {
        return Err(InputValueError).context(format!(
            "The fluctuation range [{:.3}, {:.3}] is invalid!",
            traffic_pars.min_fluctuation, traffic_pars.max_fluctuation
        ));
    }

    if traffic_pars.fluctuation_interval < 1 {
        return Err(InputValueError).context("fluctuation_interval must be at least one tick!");
    }

    // SPEED CHANGES -------------------------------------------------------------------------------
    if traffic_pars.speed_change_interval < 1 {
        return Err(InputValueError).context("speed_change_interval must be at least one tick!");
    }

    let [change_min, change_max] = traffic_pars.speed_change_interval_range;

    if change_min < 1 || change_max < change_min {
        return Err(InputValueError).context(format!(
            "The speed change interval range [{}, {}] is invalid (required: 1 <= min <= max)!",
            change_min, change_max
        ));
    }

    let [reset_min, reset_max] = traffic_pars.reset_speed_interval_range;

    if reset_max < reset_min {
        return Err(InputValueError).context(format!(
            "The speed reset interval range [{}, {}] is invalid (required: min <= max)!",
            reset_min, reset_max
        ));
    }

    // a reset offset that is not smaller than the speed change interval is never reached
    if reset_max >= change_min {
        warn!(
            "Speed resets with an offset of up to {} ticks might not happen for speed change \
            intervals from {} ticks!",
            reset_max, change_min
        );
    }

    Ok(())
}

/// check_visual_pars checks the car images and the scene colors.
pub fn check_visual_pars(visual_pars: &VisualPars) -> anyhow::Result<()> {
    if visual_pars.filenames.is_empty() {
        return Err(InputValueError).context("At least one car image file name is required!");
    }

    if visual_pars.visual_width < 1 || visual_pars.visual_height < 1 {
        return Err(InputValueError).context(format!(
            "The car image size must be positive, but is {}x{}px!",
            visual_pars.visual_width, visual_pars.visual_height
        ));
    }

    SceneColors::from_visual_pars(visual_pars).context("Invalid scene color!")?;

    Ok(())
}
