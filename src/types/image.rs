use egui::{ColorImage, TextureHandle};
use image::RgbImage;

/// A GPU texture plus the dimensions of the pixels behind it. Display-side
/// only; the full-resolution pixels stay with the session state.
#[derive(Clone)]
pub struct ImageData {
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Upload an RGB image as a texture. NEAREST filtering keeps block
    /// edges hard when the preview is drawn larger than the texture.
    pub fn from_rgb(ctx: &egui::Context, name: &str, image: &RgbImage) -> ImageData {
        let size = [image.width() as usize, image.height() as usize];
        let color_image = ColorImage::from_rgb(size, image.as_raw());
        let texture = ctx.load_texture(name, color_image, egui::TextureOptions::NEAREST);

        ImageData {
            texture,
            width: image.width(),
            height: image.height(),
        }
    }

    pub fn size_vec2(&self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}
