use crate::core::ring::Ring;
use crate::interfaces::gui_interface::{Canvas, VisualId};
use helpers::general::normalize_angle_deg;
use helpers::geometry::Point2d;

/// Car is a single vehicle on the ring. Its state consists of the angle on the ring and the
/// speed, which is the angle (degrees) it covers within one tick.
#[derive(Debug, Clone)]
pub struct Car {
    pub car_no: u32,
    pub angle: f64,
    pub speed: f64,
    pub visual: VisualId,
    pub no_laps: u32,
}

impl Car {
    pub fn new(car_no: u32, angle: f64, speed: f64, visual: VisualId) -> Car {
        Car {
            car_no,
            angle: normalize_angle_deg(angle),
            speed,
            visual,
            no_laps: 0,
        }
    }

    /// The method moves the car along the ring by its current speed and keeps the angle within
    /// [0.0, 360.0).
    pub fn advance(&mut self) {
        let angle_raw = self.angle + self.speed;
        self.angle = normalize_angle_deg(angle_raw);

        if angle_raw >= 360.0 {
            self.no_laps += 1;
        }
    }

    /// The method returns the current position of the car in screen coordinates.
    pub fn position(&self, ring: &Ring) -> Point2d {
        ring.get_coords_for_angle(self.angle)
    }

    /// The method asks the canvas to draw the car's visual at its current position. The canvas
    /// rotates counter-clockwise for positive angles whereas the ring angle runs clockwise on
    /// screen (y axis pointing down), therefore the visual is rotated by the negative angle.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, ring: &Ring) {
        canvas.draw_rotated(self.visual, -self.angle, &self.position(ring));
    }
}
