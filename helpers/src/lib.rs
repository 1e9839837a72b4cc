pub mod buffer;
pub mod general;
pub mod geometry;



#[cfg(test)]
mod geometry_tests {
    use crate::geometry::{Point2d, Vector2d};
    use approx::{assert_abs_diff_eq, assert_ulps_eq};

    #[test]
    fn test_point2d_from_polar() {
        let center = Point2d { x: 500.0, y: 500.0 };
        assert_eq!(
            Point2d::from_polar(&center, 400.0, 0.0),
            Point2d { x: 900.0, y: 500.0 }
        );
        let p = Point2d::from_polar(&center, 400.0, 90.0);
        assert_abs_diff_eq!(p.x, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 900.0, epsilon = 1e-9);
    }
    #[test]
    fn test_point2d_dist() {
        let p1 = Point2d { x: 1.0, y: 2.0 };
        let p2 = Point2d { x: 4.0, y: 6.0 };
        assert_ulps_eq!(p1.dist(&p2), 5.0);
        assert_ulps_eq!(p2.dist(&p1), 5.0);
    }
    #[test]
    fn test_point2d_shift() {
        let p = Point2d { x: 1.0, y: 2.0 };
        assert_eq!(
            p.shift(&Vector2d { dx: -1.0, dy: 0.5 }),
            Point2d { x: 0.0, y: 2.5 }
        );
    }
    #[test]
    fn test_vector2d_sub_add() {
        let v1 = Vector2d { dx: 5.0, dy: 5.0 };
        let v2 = Vector2d { dx: 2.0, dy: -1.0 };
        assert_eq!(v1.sub(&v2), Vector2d { dx: 3.0, dy: 6.0 });
        assert_eq!(v1.add(&v2), Vector2d { dx: 7.0, dy: 4.0 });
    }
    #[test]
    fn test_vector2d_abs() {
        let v1 = Vector2d { dx: 5.0, dy: 5.0 };
        assert_ulps_eq!(v1.abs(), 50.0_f64.sqrt());
    }
    #[test]
    fn test_vector2d_rotated() {
        let v = Vector2d { dx: 1.0, dy: 0.0 }.rotated(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(v.dx, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.dy, 1.0, epsilon = 1e-12);
    }
}
