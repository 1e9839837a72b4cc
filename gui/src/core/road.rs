use crate::interfaces::ringsim_interface::to_color32;
use eframe::egui;
use eframe::emath::RectTransform;
use helpers::geometry::Point2d;
use ringsim::core::ring::Ring;
use ringsim::interfaces::gui_interface::SceneColors;
use std::f64::consts::PI;

/// (rad) Length of a lane marking dash
pub const DASH_LENGTH: f64 = PI / 20.0;

/// (rad) Gap between two lane marking dashes
pub const GAP_LENGTH: f64 = PI / 40.0;

/// (px) Width of the lane markings
pub const LANE_MARKING_WIDTH: f64 = 8.0;

/// (px) Offset of the lane marking center line from the ring (the outer edge of the markings is 5px
/// outside the ring)
pub const LANE_MARKING_OFFSET: f64 = 5.0 - LANE_MARKING_WIDTH / 2.0;

/// (deg) Angular resolution of the dash polylines
const DASH_RESOLUTION: f64 = 1.0;

/// get_lane_marking_dashes returns the polylines (scene coordinates) of the dashed lane markings.
/// The dashes start at angle 0 and are laid out counter-clockwise as seen on screen.
pub fn get_lane_marking_dashes(ring: &Ring) -> Vec<Vec<Point2d>> {
    let no_dashes = (2.0 * PI / (DASH_LENGTH + GAP_LENGTH)) as usize;
    let no_points = (DASH_LENGTH.to_degrees() / DASH_RESOLUTION).ceil() as usize + 1;
    let radius = ring.radius + LANE_MARKING_OFFSET;

    (0..no_dashes)
        .map(|i| {
            let start_angle = i as f64 * (DASH_LENGTH + GAP_LENGTH);

            (0..no_points)
                .map(|j| {
                    let angle = start_angle + DASH_LENGTH * j as f64 / (no_points - 1) as f64;
                    Point2d::from_polar(&ring.center, radius, -angle.to_degrees())
                })
                .collect()
        })
        .collect()
}

/// get_road_shapes creates the shapes of the road surface, the area enclosed by the road, and the
/// lane markings.
pub fn get_road_shapes(
    ring: &Ring,
    colors: &SceneColors,
    to_screen: &RectTransform,
) -> Vec<egui::Shape> {
    let scale = to_screen.scale().x;
    let center = to_screen.transform_pos(to_pos2(&ring.center));
    let (r_outer, r_inner) = ring.get_road_radii();

    let mut shapes = vec![
        egui::Shape::circle_filled(center, r_outer as f32 * scale, to_color32(&colors.road)),
        egui::Shape::circle_filled(center, r_inner as f32 * scale, to_color32(&colors.inner)),
    ];

    let stroke = egui::Stroke::new(
        LANE_MARKING_WIDTH as f32 * scale,
        to_color32(&colors.lane_markings),
    );

    for dash in get_lane_marking_dashes(ring).iter() {
        shapes.push(egui::Shape::line(
            dash.iter()
                .map(|p| to_screen.transform_pos(to_pos2(p)))
                .collect(),
            stroke,
        ));
    }

    shapes
}

pub fn to_pos2(p: &Point2d) -> egui::Pos2 {
    egui::Pos2 {
        x: p.x as f32,
        y: p.y as f32,
    }
}
