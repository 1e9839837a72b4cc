use std::error::Error;
use std::fmt;

/// InputValueError is used if some simulation option or parameter does not fulfill the posed
/// requirements, e.g., a roster that is too small for the speed-change policy.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// normalize_angle_deg maps an arbitrary angle (degrees) into the range [0.0, 360.0).
pub fn normalize_angle_deg(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);

    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// mean returns the arithmetic mean of the values in x or None if x is empty.
pub fn mean(x: &[f64]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }
    Some(x.iter().sum::<f64>() / x.len() as f64)
}
