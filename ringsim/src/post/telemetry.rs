use crate::core::car::Car;
use crate::core::ring::Ring;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const TELEMETRY_HEADER: [&str; 6] = ["time", "car_id", "angle", "speed", "x", "y"];

/// * `time` - Tick the snapshot belongs to (0-based)
/// * `car_id` - Roster index of the car (0-based)
/// * `angle` - (deg) Angle of the car on the ring
/// * `speed` - (deg/tick) Speed of the car
/// * `x` - (px) Screen-space x coordinate
/// * `y` - (px) Screen-space y coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TelemetryRecord {
    pub time: u64,
    pub car_id: u32,
    pub angle: f64,
    pub speed: f64,
    pub x: f64,
    pub y: f64,
}

/// TelemetryRecorder collects one record per car and tick in an append-only log that is written
/// to a CSV file once at the end of the simulation.
#[derive(Debug, Default, Clone)]
pub struct TelemetryRecorder {
    records: Vec<TelemetryRecord>,
}

impl TelemetryRecorder {
    pub fn new() -> TelemetryRecorder {
        Default::default()
    }

    /// The method appends a snapshot of every car (in roster order) for the given tick.
    pub fn record(&mut self, tick: u64, cars_list: &[Car], ring: &Ring) {
        self.records.reserve(cars_list.len());

        for car in cars_list.iter() {
            let pos = car.position(ring);

            self.records.push(TelemetryRecord {
                time: tick,
                car_id: car.car_no,
                angle: car.angle,
                speed: car.speed,
                x: pos.x,
                y: pos.y,
            });
        }
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The method writes the entire log to a CSV file. The header is written explicitly such that
    /// it is present even for an empty log. The parent directory must already exist.
    pub fn flush(&self, filepath: &Path) -> anyhow::Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(filepath)
            .context(format!(
                "Failed to create telemetry file {}!",
                filepath.display()
            ))?;

        csv_writer
            .write_record(TELEMETRY_HEADER)
            .context("Failed to write telemetry header!")?;

        for record in self.records.iter() {
            csv_writer.serialize(record).context(format!(
                "Failed to write telemetry record of car {} at tick {}!",
                record.car_id, record.time
            ))?;
        }

        csv_writer.flush().context(format!(
            "Failed to write telemetry file {}!",
            filepath.display()
        ))?;

        Ok(())
    }

    /// from_csv reads a telemetry file that was written by flush.
    pub fn from_csv(filepath: &Path) -> anyhow::Result<TelemetryRecorder> {
        let mut csv_reader = csv::Reader::from_path(filepath).context(format!(
            "Failed to open telemetry file {}!",
            filepath.display()
        ))?;
        let mut records: Vec<TelemetryRecord> = vec![];

        for (i, result) in csv_reader.deserialize().enumerate() {
            let record: TelemetryRecord = result.context(format!(
                "Failed to parse row {} of telemetry file {}!",
                i + 1,
                filepath.display()
            ))?;
            records.push(record);
        }

        Ok(TelemetryRecorder { records })
    }
}
