use anyhow::Context;
use helpers::geometry::Point2d;
use serde::Deserialize;
use std::path::PathBuf;

/// VisualId is an opaque handle to an image that was loaded by the rendering side. The core only
/// passes it back to the canvas and never inspects pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisualId(pub usize);

/// Canvas is implemented by the rendering side and used by the cars to draw themselves.
pub trait Canvas {
    /// draw_rotated draws the visual centered at center, rotated counter-clockwise (as seen on
    /// screen) by angle_deg.
    fn draw_rotated(&mut self, visual: VisualId, angle_deg: f64, center: &Point2d);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// from_hex converts a CSS color string (e.g. "#505050") into a RGB color.
    pub fn from_hex(color: &str) -> anyhow::Result<RgbColor> {
        let tmp_color = color
            .parse::<css_color_parser::Color>()
            .context(format!("Could not parse color {}!", color))?;

        Ok(RgbColor {
            r: tmp_color.r,
            g: tmp_color.g,
            b: tmp_color.b,
        })
    }
}

/// * `assets_dir` - Directory containing the car images
/// * `filenames` - Car image file names, every car gets one of them randomly assigned
/// * `visual_width` - (px) Width the car images are scaled to
/// * `visual_height` - (px) Height the car images are scaled to
/// * `color_grass` - Hex-code of the background color
/// * `color_road` - Hex-code of the road surface
/// * `color_inner` - Hex-code of the area enclosed by the road
/// * `color_lane_markings` - Hex-code of the lane markings
#[derive(Debug, Deserialize, Clone)]
pub struct VisualPars {
    pub assets_dir: PathBuf,
    pub filenames: Vec<String>,
    pub visual_width: u32,
    pub visual_height: u32,
    pub color_grass: String,
    pub color_road: String,
    pub color_inner: String,
    pub color_lane_markings: String,
}

impl Default for VisualPars {
    fn default() -> Self {
        VisualPars {
            assets_dir: PathBuf::from("assets"),
            filenames: [
                "black_car.png",
                "blue_truck.png",
                "green_car.png",
                "orange_car.png",
                "yellow_car.png",
            ]
            .iter()
            .map(|filename| filename.to_string())
            .collect(),
            visual_width: 35,
            visual_height: 60,
            color_grass: String::from("#4c9a2a"),
            color_road: String::from("#505050"),
            color_inner: String::from("#000000"),
            color_lane_markings: String::from("#ffffff"),
        }
    }
}

impl VisualPars {
    /// The method returns the paths of all car images.
    pub fn get_visual_paths(&self) -> Vec<PathBuf> {
        self.filenames
            .iter()
            .map(|filename| self.assets_dir.join(filename))
            .collect()
    }
}

/// SceneColors contains the parsed colors of the static scene elements.
#[derive(Debug, Clone, Default)]
pub struct SceneColors {
    pub grass: RgbColor,
    pub road: RgbColor,
    pub inner: RgbColor,
    pub lane_markings: RgbColor,
}

impl SceneColors {
    pub fn from_visual_pars(visual_pars: &VisualPars) -> anyhow::Result<SceneColors> {
        Ok(SceneColors {
            grass: RgbColor::from_hex(&visual_pars.color_grass)?,
            road: RgbColor::from_hex(&visual_pars.color_road)?,
            inner: RgbColor::from_hex(&visual_pars.color_inner)?,
            lane_markings: RgbColor::from_hex(&visual_pars.color_lane_markings)?,
        })
    }
}
