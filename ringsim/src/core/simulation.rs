use crate::core::car::Car;
use crate::core::ring::{Ring, RingPars};
use crate::interfaces::gui_interface::{Canvas, VisualId};
use crate::post::sim_result::{CarResult, SimOutput, SimResult};
use crate::post::telemetry::TelemetryRecorder;
use crate::pre::check_sim_opts_pars::{check_ring_pars, check_traffic_pars};
use anyhow::Context;
use helpers::general::{mean, InputValueError};
use log::debug;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

/// Number of cars that are slowed down in a speed change.
pub const NO_SLOW_CARS: usize = 2;

/// Number of cars that are sped up in a speed change.
pub const NO_FAST_CARS: usize = 2;

/// The slow and fast cars of a speed change must be disjoint, so the roster needs at least this
/// many cars.
pub const MIN_NO_CARS: u32 = (NO_SLOW_CARS + NO_FAST_CARS) as u32;

/// * `no_cars` - Number of cars on the ring
/// * `normal_speed` - (deg/tick) Speed of all cars at the start and after a speed reset
/// * `slow_speed` - (deg/tick) Speed set for the slowed down cars of a speed change
/// * `fast_speed` - (deg/tick) Speed set for the sped up cars of a speed change
/// * `collision_distance` - (px) A car adopts the speed of the car in front if it is slower and
/// closer than this distance
/// * `min_fluctuation` - (deg/tick) Lower bound of the random speed fluctuation
/// * `max_fluctuation` - (deg/tick) Upper bound of the random speed fluctuation
/// * `min_speed` - (deg/tick) The fluctuation never reduces a speed below this value
/// * `fluctuation_interval` - (ticks) Speeds fluctuate every n-th tick (including tick 0)
/// * `speed_change_interval` - (ticks) Initial interval between two speed changes
/// * `reset_speed_interval` - (ticks) Initial offset of the speed reset after a speed change
/// * `speed_change_interval_range` - (ticks) Range the speed change interval is resampled from
/// (inclusive)
/// * `reset_speed_interval_range` - (ticks) Range the speed reset offset is resampled from
/// (inclusive)
#[derive(Debug, Deserialize, Clone)]
pub struct TrafficPars {
    pub no_cars: u32,
    pub normal_speed: f64,
    pub slow_speed: f64,
    pub fast_speed: f64,
    pub collision_distance: f64,
    pub min_fluctuation: f64,
    pub max_fluctuation: f64,
    pub min_speed: f64,
    pub fluctuation_interval: u64,
    pub speed_change_interval: u64,
    pub reset_speed_interval: u64,
    pub speed_change_interval_range: [u64; 2],
    pub reset_speed_interval_range: [u64; 2],
}

impl Default for TrafficPars {
    fn default() -> Self {
        TrafficPars {
            no_cars: 10,
            normal_speed: 1.0,
            slow_speed: 0.2,
            fast_speed: 2.0,
            collision_distance: 100.0,
            min_fluctuation: -0.2,
            max_fluctuation: 0.2,
            min_speed: 0.5,
            fluctuation_interval: 60,
            speed_change_interval: 18000,
            reset_speed_interval: 200,
            speed_change_interval_range: [400, 600],
            reset_speed_interval_range: [100, 200],
        }
    }
}

/// create_rng returns the random number generator of a simulation. A seed makes the simulation
/// reproducible, otherwise the generator is seeded from the operating system.
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// select_slow_fast_cars draws NO_SLOW_CARS + NO_FAST_CARS distinct car indices. The first ones
/// are slowed down, the remaining ones are sped up.
pub fn select_slow_fast_cars<R: Rng + ?Sized>(
    no_cars: usize,
    rng: &mut R,
) -> ([usize; NO_SLOW_CARS], [usize; NO_FAST_CARS]) {
    let idxs = index::sample(rng, no_cars, NO_SLOW_CARS + NO_FAST_CARS).into_vec();

    let mut idxs_slow = [0; NO_SLOW_CARS];
    let mut idxs_fast = [0; NO_FAST_CARS];
    idxs_slow.copy_from_slice(&idxs[..NO_SLOW_CARS]);
    idxs_fast.copy_from_slice(&idxs[NO_SLOW_CARS..]);

    (idxs_slow, idxs_fast)
}

/// get_car_pair_idxs_list creates a list of car index pairs (idx rear, idx front) for all
/// neighbors on the ring, including the pair that closes the ring.
pub fn get_car_pair_idxs_list(no_cars: usize) -> Vec<[usize; 2]> {
    (0..no_cars).map(|i| [i, (i + 1) % no_cars]).collect()
}

/// Simulation is the simulation context. It owns the roster, the ring, the random number
/// generator, and the telemetry log, and is advanced exclusively by simulate_tick.
#[derive(Debug)]
pub struct Simulation<R: Rng> {
    pub cur_tick: u64,
    pub ring: Ring,
    pub cars_list: Vec<Car>,
    pub telemetry: TelemetryRecorder,
    pub speed_change_interval: u64,
    pub reset_speed_interval: u64,
    normal_speed: f64,
    slow_speed: f64,
    fast_speed: f64,
    collision_distance: f64,
    min_fluctuation: f64,
    max_fluctuation: f64,
    min_speed: f64,
    fluctuation_interval: u64,
    speed_change_interval_range: [u64; 2],
    reset_speed_interval_range: [u64; 2],
    car_pair_idxs_list: Vec<[usize; 2]>,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// The method creates the simulation with all cars evenly spaced around the ring at normal
    /// speed. Every car gets one of the no_visuals visuals randomly assigned.
    pub fn new(
        traffic_pars: &TrafficPars,
        ring_pars: &RingPars,
        no_visuals: usize,
        mut rng: R,
    ) -> anyhow::Result<Simulation<R>> {
        // check input (the simulation must not start with an invalid configuration)
        check_ring_pars(ring_pars)?;
        check_traffic_pars(traffic_pars)?;

        if no_visuals < 1 {
            return Err(InputValueError).context("At least one car visual is required!");
        }

        // create cars
        let no_cars = traffic_pars.no_cars;
        let cars_list: Vec<Car> = (0..no_cars)
            .map(|car_no| {
                Car::new(
                    car_no,
                    car_no as f64 * (360.0 / no_cars as f64),
                    traffic_pars.normal_speed,
                    VisualId(rng.gen_range(0..no_visuals)),
                )
            })
            .collect();

        Ok(Simulation {
            cur_tick: 0,
            ring: Ring::new(ring_pars),
            cars_list,
            telemetry: TelemetryRecorder::new(),
            speed_change_interval: traffic_pars.speed_change_interval,
            reset_speed_interval: traffic_pars.reset_speed_interval,
            normal_speed: traffic_pars.normal_speed,
            slow_speed: traffic_pars.slow_speed,
            fast_speed: traffic_pars.fast_speed,
            collision_distance: traffic_pars.collision_distance,
            min_fluctuation: traffic_pars.min_fluctuation,
            max_fluctuation: traffic_pars.max_fluctuation,
            min_speed: traffic_pars.min_speed,
            fluctuation_interval: traffic_pars.fluctuation_interval,
            speed_change_interval_range: traffic_pars.speed_change_interval_range,
            reset_speed_interval_range: traffic_pars.reset_speed_interval_range,
            car_pair_idxs_list: get_car_pair_idxs_list(no_cars as usize),
            rng,
        })
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHOD ---------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method simulates one tick. Execution order:
    /// 1. Advance all cars by their current speed.
    /// 2. Avoid collisions by slowing down cars that are too close to the car in front.
    /// 3. Record the telemetry of all cars (moved and collision-adjusted state of the tick).
    /// 4. Apply random speed fluctuations (every fluctuation_interval ticks).
    /// 5. Apply a speed change (slow and fast cars) or a speed reset if either is due.
    /// 6. Increment the tick counter.
    pub fn simulate_tick(&mut self) {
        let tick = self.cur_tick;

        for car in self.cars_list.iter_mut() {
            car.advance();
        }

        self.avoid_collisions();

        // speed policies of this tick only take effect in the records of the next tick
        self.telemetry.record(tick, &self.cars_list, &self.ring);

        if tick % self.fluctuation_interval == 0 {
            self.fluctuate_speeds();
        }

        self.handle_speed_changes(tick);

        self.cur_tick += 1;
    }

    // ---------------------------------------------------------------------------------------------
    // SIMULATION PARTS ----------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method performs a single pass over all neighboring car pairs in ascending order of the
    /// rear car. If the rear car is closer than collision_distance to the car in front, it adopts
    /// the speed of the car in front if that one is slower. Speeds reduced earlier in the pass are
    /// visible to later pairs, but the pass is not repeated.
    pub(crate) fn avoid_collisions(&mut self) {
        for &[idx_rear, idx_front] in self.car_pair_idxs_list.iter() {
            let dist = self.cars_list[idx_rear]
                .position(&self.ring)
                .dist(&self.cars_list[idx_front].position(&self.ring));

            if dist < self.collision_distance {
                let speed_front = self.cars_list[idx_front].speed;
                let car_rear = &mut self.cars_list[idx_rear];
                car_rear.speed = car_rear.speed.min(speed_front);
            }
        }
    }

    /// The method adds a uniformly distributed random value to the speed of every car. The
    /// resulting speed is not allowed to fall below min_speed.
    pub(crate) fn fluctuate_speeds(&mut self) {
        for car in self.cars_list.iter_mut() {
            let fluctuation = self
                .rng
                .gen_range(self.min_fluctuation..=self.max_fluctuation);
            car.speed = (car.speed + fluctuation).max(self.min_speed);
        }
    }

    /// The method checks whether a speed change or a speed reset is due in the current tick. Both
    /// are mutually exclusive, the speed change is checked first. After every speed change, the
    /// intervals for the next cycle are resampled.
    fn handle_speed_changes(&mut self, tick: u64) {
        if tick % self.speed_change_interval == 0 {
            let (idxs_slow, idxs_fast) = self.change_speeds();

            self.speed_change_interval = self.rng.gen_range(
                self.speed_change_interval_range[0]..=self.speed_change_interval_range[1],
            );
            self.reset_speed_interval = self.rng.gen_range(
                self.reset_speed_interval_range[0]..=self.reset_speed_interval_range[1],
            );

            debug!(
                "Tick {}: slowed down cars {:?}, sped up cars {:?}, next speed change interval is \
                {} ticks with a speed reset after {} ticks",
                tick, idxs_slow, idxs_fast, self.speed_change_interval, self.reset_speed_interval
            );
        } else if tick % self.speed_change_interval == self.reset_speed_interval {
            self.reset_speeds();
            debug!("Tick {}: reset speeds of all cars", tick);
        }
    }

    /// The method sets the speed of NO_SLOW_CARS random cars to slow_speed and of NO_FAST_CARS
    /// other random cars to fast_speed. It returns the indices of the slow and fast cars.
    pub(crate) fn change_speeds(&mut self) -> ([usize; NO_SLOW_CARS], [usize; NO_FAST_CARS]) {
        let (idxs_slow, idxs_fast) = select_slow_fast_cars(self.cars_list.len(), &mut self.rng);

        for &idx in idxs_slow.iter() {
            self.cars_list[idx].speed = self.slow_speed;
        }
        for &idx in idxs_fast.iter() {
            self.cars_list[idx].speed = self.fast_speed;
        }

        (idxs_slow, idxs_fast)
    }

    /// The method sets the speed of all cars back to normal_speed.
    pub(crate) fn reset_speeds(&mut self) {
        for car in self.cars_list.iter_mut() {
            car.speed = self.normal_speed;
        }
    }

    // ---------------------------------------------------------------------------------------------
    // METHODS (HELPERS) ---------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// render draws all cars in roster order.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for car in self.cars_list.iter() {
            car.render(canvas, &self.ring);
        }
    }

    /// get_mean_speed returns the current mean speed of all cars.
    pub fn get_mean_speed(&self) -> f64 {
        let speeds: Vec<f64> = self.cars_list.iter().map(|car| car.speed).collect();
        mean(&speeds).unwrap_or(0.0)
    }

    /// get_sim_result returns a simulation result struct containing the final car states and the
    /// mean recorded speed of every car.
    pub fn get_sim_result(&self) -> SimResult {
        let no_cars = self.cars_list.len();
        let mut speed_sums = vec![0.0; no_cars];
        let mut no_records = vec![0u64; no_cars];

        for record in self.telemetry.records().iter() {
            let idx = record.car_id as usize;
            if idx < no_cars {
                speed_sums[idx] += record.speed;
                no_records[idx] += 1;
            }
        }

        SimResult {
            no_ticks: self.cur_tick,
            car_results: self
                .cars_list
                .iter()
                .enumerate()
                .map(|(i, car)| CarResult {
                    car_no: car.car_no,
                    no_laps: car.no_laps,
                    angle: car.angle,
                    speed: car.speed,
                    mean_speed: if no_records[i] > 0 {
                        Some(speed_sums[i] / no_records[i] as f64)
                    } else {
                        None
                    },
                })
                .collect(),
        }
    }

    /// finish returns the simulation result and hands over the telemetry log, which is left empty
    /// in the simulation.
    pub fn finish(&mut self) -> SimOutput {
        SimOutput {
            result: self.get_sim_result(),
            telemetry: std::mem::take(&mut self.telemetry),
        }
    }
}
