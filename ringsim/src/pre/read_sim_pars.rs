use crate::core::ring::RingPars;
use crate::core::simulation::TrafficPars;
use crate::interfaces::gui_interface::VisualPars;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// SimPars is used to store all other parameter structs. The default values are the built-in
/// parameters of the ring road (also available in input/parameters/pars_ring_road.json).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SimPars {
    pub ring_pars: RingPars,
    pub traffic_pars: TrafficPars,
    pub visual_pars: VisualPars,
}

/// read_sim_pars reads the JSON file and decodes the JSON string into the simulation parameters
/// struct.
pub fn read_sim_pars(filepath: &Path) -> anyhow::Result<SimPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}

/// get_sim_pars returns the parameters from the inserted file or the built-in parameters if no
/// file was inserted.
pub fn get_sim_pars(filepath: Option<&Path>) -> anyhow::Result<SimPars> {
    match filepath {
        Some(filepath) => read_sim_pars(filepath),
        None => Ok(SimPars::default()),
    }
}
