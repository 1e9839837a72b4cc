use crate::core::visuals::VisualTexture;
use eframe::egui;
use eframe::emath::RectTransform;
use helpers::geometry::{Point2d, Vector2d};
use log::debug;
use ringsim::interfaces::gui_interface::{Canvas, RgbColor, VisualId};

/// EguiCanvas collects the shapes the cars draw during a frame. The shapes are handed to the
/// painter afterwards.
pub struct EguiCanvas<'a> {
    pub visual_textures: &'a [VisualTexture],
    pub to_screen: RectTransform,
    pub shapes: Vec<egui::Shape>,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(visual_textures: &'a [VisualTexture], to_screen: RectTransform) -> EguiCanvas<'a> {
        EguiCanvas {
            visual_textures,
            to_screen,
            shapes: vec![],
        }
    }

    pub fn into_shapes(self) -> Vec<egui::Shape> {
        self.shapes
    }
}

impl<'a> Canvas for EguiCanvas<'a> {
    fn draw_rotated(&mut self, visual: VisualId, angle_deg: f64, center: &Point2d) {
        let visual_texture = match self.visual_textures.get(visual.0) {
            Some(x) => x,
            None => {
                debug!("Visual {} is not loaded, skipping it", visual.0);
                return;
            }
        };

        // screen y points downwards, therefore a counter-clockwise rotation on screen is a
        // negative rotation in screen coordinates
        let angle_screen = -angle_deg.to_radians();
        let half_width = visual_texture.size.x as f64 / 2.0;
        let half_height = visual_texture.size.y as f64 / 2.0;

        // corners (top-left, top-right, bottom-right, bottom-left) with their texture coordinates
        let corners = [
            (-half_width, -half_height, egui::pos2(0.0, 0.0)),
            (half_width, -half_height, egui::pos2(1.0, 0.0)),
            (half_width, half_height, egui::pos2(1.0, 1.0)),
            (-half_width, half_height, egui::pos2(0.0, 1.0)),
        ];

        let mut mesh = egui::Mesh::with_texture(visual_texture.texture.id());

        for (dx, dy, uv) in corners.iter() {
            let corner = center.shift(&Vector2d { dx: *dx, dy: *dy }.rotated(angle_screen));

            mesh.vertices.push(egui::epaint::Vertex {
                pos: self.to_screen * egui::pos2(corner.x as f32, corner.y as f32),
                uv: *uv,
                color: egui::Color32::WHITE,
            });
        }

        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);

        self.shapes.push(egui::Shape::mesh(mesh));
    }
}

pub fn to_color32(color: &RgbColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
