use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "RS-RING",
    about = "A ring-road traffic simulator written in Rust"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing
    #[arg(short, long)]
    pub debug: bool,

    /// Run without GUI for the inserted number of ticks
    #[arg(long)]
    pub headless: bool,

    /// Pace a headless run in real time (the GUI is always paced)
    #[arg(long, requires = "headless")]
    pub realtime: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set number of ticks to simulate (only relevant in case of a headless run)
    #[arg(short, long, default_value_t = 3600)]
    pub no_ticks: u64,

    /// Set path to a simulation parameter file (built-in parameters are used if not set)
    #[arg(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set real-time factor, should be in the range [0.1, 100.0]
    #[arg(short, long, default_value_t = 1.0)]
    pub realtime_factor: f64,

    /// Set seed of the random number generator (seeded randomly if not set)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Set path of the telemetry CSV file written at the end of the simulation
    #[arg(
        short,
        long,
        default_value = "telemetry/car_simulation_telemetry.csv"
    )]
    pub telemetry_path: PathBuf,

    /// Set tick rate in ticks per second, should be in the range [1, 1000]
    #[arg(short = 'f', long, default_value_t = 60)]
    pub tick_rate: u32,
}
