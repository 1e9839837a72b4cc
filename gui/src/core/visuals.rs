use anyhow::Context;
use eframe::egui;
use image::imageops::FilterType;
use ringsim::interfaces::gui_interface::VisualPars;
use std::path::Path;

/// VisualTexture is a car image uploaded to the GPU together with its size in scene pixels.
pub struct VisualTexture {
    pub texture: egui::TextureHandle,
    pub size: egui::Vec2,
}

/// load_visual reads an image file and scales it to the inserted size.
pub fn load_visual(filepath: &Path, width: u32, height: u32) -> anyhow::Result<egui::ColorImage> {
    let img = image::open(filepath)
        .context(format!("Failed to load car image {}!", filepath.display()))?
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgba8();

    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        img.as_raw(),
    ))
}

/// load_visuals loads all car images. It is called before the window is opened such that a
/// missing image stops the program before the simulation starts.
pub fn load_visuals(visual_pars: &VisualPars) -> anyhow::Result<Vec<egui::ColorImage>> {
    visual_pars
        .get_visual_paths()
        .iter()
        .map(|filepath| {
            load_visual(
                filepath,
                visual_pars.visual_width,
                visual_pars.visual_height,
            )
        })
        .collect()
}

/// upload_visuals turns the loaded images into textures. The index of a texture is the visual ID
/// used by the simulation.
pub fn upload_visuals(ctx: &egui::Context, images: Vec<egui::ColorImage>) -> Vec<VisualTexture> {
    images
        .into_iter()
        .enumerate()
        .map(|(i, img)| {
            let size = egui::vec2(img.size[0] as f32, img.size[1] as f32);

            VisualTexture {
                texture: ctx.load_texture(format!("car_{}", i), img, egui::TextureOptions::LINEAR),
                size,
            }
        })
        .collect()
}
