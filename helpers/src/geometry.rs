use approx::ulps_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    /// from_polar returns the point at the given distance from the center in the direction of
    /// angle_deg (degrees, measured from the positive x axis towards the positive y axis).
    pub fn from_polar(center: &Point2d, radius: f64, angle_deg: f64) -> Point2d {
        let angle = angle_deg.to_radians();
        Point2d {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }
    pub fn as_vector2d(&self) -> Vector2d {
        Vector2d {
            dx: self.x,
            dy: self.y,
        }
    }
    pub fn shift(&self, other: &Vector2d) -> Point2d {
        self.as_vector2d().add(other).as_point2d()
    }
    /// dist returns the euclidean distance between both points.
    pub fn dist(&self, other: &Point2d) -> f64 {
        self.as_vector2d().sub(&other.as_vector2d()).abs()
    }
}

impl PartialEq for Point2d {
    fn eq(&self, other: &Self) -> bool {
        ulps_eq!(self.x, other.x) && ulps_eq!(self.y, other.y)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Vector2d {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2d {
    pub fn as_point2d(&self) -> Point2d {
        Point2d {
            x: self.dx,
            y: self.dy,
        }
    }
    pub fn sub(&self, other: &Self) -> Vector2d {
        Vector2d {
            dx: self.dx - other.dx,
            dy: self.dy - other.dy,
        }
    }
    pub fn add(&self, other: &Self) -> Vector2d {
        Vector2d {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }
    pub fn abs(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
    /// rotated returns the vector rotated by angle (rad). In screen coordinates (y pointing down)
    /// a positive angle appears as a clockwise rotation.
    pub fn rotated(&self, angle: f64) -> Vector2d {
        let (sin, cos) = angle.sin_cos();
        Vector2d {
            dx: self.dx * cos - self.dy * sin,
            dy: self.dx * sin + self.dy * cos,
        }
    }
}

impl PartialEq for Vector2d {
    fn eq(&self, other: &Self) -> bool {
        ulps_eq!(self.dx, other.dx) && ulps_eq!(self.dy, other.dy)
    }
}
