use crate::post::telemetry::TelemetryRecorder;
use anyhow::Context;
use log::info;
use std::fmt::Write;
use std::path::Path;

/// CarResult contains the final state of a single car for post-processing.
pub struct CarResult {
    pub car_no: u32,
    pub no_laps: u32,
    pub angle: f64,
    pub speed: f64,
    pub mean_speed: Option<f64>,
}

/// SimResult contains all simulation information that is required for post-processing.
pub struct SimResult {
    pub no_ticks: u64,
    pub car_results: Vec<CarResult>,
}

/// SimOutput is handed over by the simulation once it is finished.
pub struct SimOutput {
    pub result: SimResult,
    pub telemetry: TelemetryRecorder,
}

impl SimOutput {
    /// post_process writes the telemetry file and prints the results table to out. The table is
    /// printed even if the telemetry file could not be written, the flush error is returned
    /// afterwards.
    pub fn post_process<W: std::io::Write>(
        &self,
        telemetry_path: &Path,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let flush_result = self.telemetry.flush(telemetry_path);

        if flush_result.is_ok() {
            info!(
                "Wrote {} telemetry records to {}",
                self.telemetry.len(),
                telemetry_path.display()
            );
        }

        self.result.print_results(out)?;
        flush_result
    }
}

impl SimResult {
    /// print_results prints the final car states to the inserted output.
    pub fn print_results<W: std::io::Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", self.get_results_table()).context("Failed to print results!")
    }

    /// get_results_table creates the table printed by print_results.
    pub fn get_results_table(&self) -> String {
        let mut tmp_string = format!("RESULT: Car states after {} ticks\n", self.no_ticks);
        tmp_string.push_str("car, laps,   angle,  speed, mean speed\n");

        for car_result in self.car_results.iter() {
            let tmp_mean_speed = match car_result.mean_speed {
                Some(x) => format!("{:10.3}", x),
                None => format!("{:>10}", "-"),
            };

            writeln!(
                &mut tmp_string,
                "{:3}, {:4}, {:7.2}, {:6.3}, {}",
                car_result.car_no,
                car_result.no_laps,
                car_result.angle,
                car_result.speed,
                tmp_mean_speed
            )
            .unwrap();
        }

        tmp_string
    }
}
