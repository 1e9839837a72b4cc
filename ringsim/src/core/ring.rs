use helpers::geometry::Point2d;
use serde::Deserialize;

/// * `width` - (px) Width of the scene (window)
/// * `height` - (px) Height of the scene (window)
/// * `radius` - (px) Radius of the ring the cars drive on
/// * `road_half_width` - (px) Distance between the ring and the road edges (used for drawing)
#[derive(Debug, Deserialize, Clone)]
pub struct RingPars {
    pub width: u32,
    pub height: u32,
    pub radius: f64,
    pub road_half_width: f64,
}

impl Default for RingPars {
    fn default() -> Self {
        RingPars {
            width: 1000,
            height: 1000,
            radius: 400.0,
            road_half_width: 40.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ring {
    pub width: u32,
    pub height: u32,
    pub center: Point2d,
    pub radius: f64,
    pub road_half_width: f64,
}

impl Ring {
    pub fn new(ring_pars: &RingPars) -> Ring {
        // the center is placed on a full pixel (integer division) such that odd scene sizes
        // behave like the pixel grid of the window
        Ring {
            width: ring_pars.width,
            height: ring_pars.height,
            center: Point2d {
                x: (ring_pars.width / 2) as f64,
                y: (ring_pars.height / 2) as f64,
            },
            radius: ring_pars.radius,
            road_half_width: ring_pars.road_half_width,
        }
    }

    /// The method returns the screen-space coordinates of the point on the ring at angle_deg.
    pub fn get_coords_for_angle(&self, angle_deg: f64) -> Point2d {
        Point2d::from_polar(&self.center, self.radius, angle_deg)
    }

    /// The method returns the outer and inner radius of the road surface.
    pub fn get_road_radii(&self) -> (f64, f64) {
        (
            self.radius + self.road_half_width,
            self.radius - self.road_half_width,
        )
    }
}
