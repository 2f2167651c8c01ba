use crate::error::{AppError, AppResult};
use crate::exporter;
use crate::pixelate::{BLOCK_SIZE_DEFAULT, clamp_block_size, pixelate};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Session state for the preview pipeline: the decoded source image, where
/// it came from, and the current block size.
///
/// The stored image is always the full-resolution decode; every render
/// starts from it, so repeated block-size changes never compound.
pub struct ImageProcessor {
    source: Option<RgbImage>,
    source_path: Option<String>,
    block_size: u32,
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self {
            source: None,
            source_path: None,
            block_size: BLOCK_SIZE_DEFAULT,
        }
    }
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the image at `path` and make it the current source.
    ///
    /// On failure the previous selection stays loaded and usable.
    pub fn load_source(&mut self, path: &str) -> AppResult<&RgbImage> {
        let decoded = image::open(path)
            .map_err(|e| AppError::decode(path, e))?
            .to_rgb8();

        log::info!("loaded {path} ({}x{})", decoded.width(), decoded.height());

        self.source_path = Some(path.to_string());
        Ok(&*self.source.insert(decoded))
    }

    /// Store a new block size, clamped to the supported range. The block
    /// size survives image changes; only a restart resets it.
    pub fn set_block_size(&mut self, size: u32) -> u32 {
        self.block_size = clamp_block_size(size);
        self.block_size
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Pixelate the stored full-resolution source at the current block size.
    pub fn render(&self) -> Option<RgbImage> {
        let source = self.source.as_ref()?;
        Some(pixelate(source, self.block_size))
    }

    /// Export the pixelated image to `dest`, re-decoding the source from
    /// disk rather than reusing the in-memory copy. Returns the resolved
    /// destination path.
    pub fn export(&self, dest: &Path) -> AppResult<PathBuf> {
        let source_path = self
            .source_path
            .as_deref()
            .ok_or(AppError::NoSourceSelected)?;
        exporter::export_pixelated(source_path, dest, self.block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelate::{BLOCK_SIZE_MAX, BLOCK_SIZE_MIN};
    use image::Rgb;

    fn write_test_image(dir: &Path) -> (PathBuf, RgbImage) {
        let img = RgbImage::from_fn(64, 48, |x, y| {
            Rgb([(x * 4) as u8, (y * 5) as u8, (x * y) as u8])
        });
        let path = dir.join("source.png");
        img.save(&path).unwrap();
        (path, img)
    }

    #[test]
    fn test_export_without_selection_fails() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.png");

        let processor = ImageProcessor::new();
        let err = processor.export(&dest).unwrap_err();

        assert!(matches!(err, AppError::NoSourceSelected));
        assert!(!dest.exists());
    }

    #[test]
    fn test_block_size_clamped() {
        let mut processor = ImageProcessor::new();
        assert_eq!(processor.block_size(), BLOCK_SIZE_DEFAULT);
        assert_eq!(processor.set_block_size(1), BLOCK_SIZE_MIN);
        assert_eq!(processor.set_block_size(200), BLOCK_SIZE_MAX);
        assert_eq!(processor.set_block_size(17), 17);
    }

    #[test]
    fn test_render_always_starts_from_original() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = write_test_image(dir.path());

        let mut processor = ImageProcessor::new();
        processor.load_source(path.to_str().unwrap()).unwrap();

        // Render at a coarse size first, then at a fine one.
        processor.set_block_size(30);
        let _coarse = processor.render().unwrap();
        processor.set_block_size(4);
        let fine_after_coarse = processor.render().unwrap();

        // A fresh session at the fine size must produce the same pixels.
        let mut fresh = ImageProcessor::new();
        fresh.load_source(path.to_str().unwrap()).unwrap();
        fresh.set_block_size(4);
        let fine_direct = fresh.render().unwrap();

        assert_eq!(fine_after_coarse.as_raw(), fine_direct.as_raw());
    }

    #[test]
    fn test_render_without_source_is_noop() {
        let processor = ImageProcessor::new();
        assert!(processor.render().is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_selection() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = write_test_image(dir.path());

        let mut processor = ImageProcessor::new();
        processor.load_source(path.to_str().unwrap()).unwrap();
        let before = processor.render().unwrap();

        let missing = dir.path().join("missing.png");
        let err = processor
            .load_source(missing.to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));

        // Path and pixels of the previous selection are still in place.
        assert_eq!(processor.source_path(), path.to_str());
        assert_eq!(processor.render().unwrap().as_raw(), before.as_raw());
    }

    #[test]
    fn test_block_size_survives_new_selection() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = write_test_image(dir.path());

        let mut processor = ImageProcessor::new();
        processor.set_block_size(20);
        processor.load_source(path.to_str().unwrap()).unwrap();
        assert_eq!(processor.block_size(), 20);
    }
}
