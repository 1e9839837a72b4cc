pub mod core {
    pub mod gui;
    pub mod road;
    pub mod visuals;
}
pub mod interfaces {
    pub mod ringsim_interface;
}

#[cfg(test)]
mod test_utils {
    use std::path::PathBuf;

    /// get_tmp_dir returns a fresh temporary directory for the inserted test.
    pub fn get_tmp_dir(name: &str) -> PathBuf {
        let tmp_dir = std::env::temp_dir().join(format!("gui_tests_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&tmp_dir);
        std::fs::create_dir_all(&tmp_dir).unwrap();
        tmp_dir
    }

    /// write_png writes a single-colored PNG image of the inserted size.
    pub fn write_png(filepath: &std::path::Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]))
            .save(filepath)
            .unwrap();
    }
}
