use crate::error::{AppError, AppResult};
use crate::pixelate::pixelate;
use crate::types::ExportFormat;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

const JPEG_QUALITY: u8 = 95;

/// Pixelate the image at `source_path` and write it to `dest`.
///
/// The source is decoded fresh from disk rather than taken from the preview
/// cache, so an externally modified file exports in its current state. The
/// output format follows the destination extension; unknown or missing
/// extensions fall back to PNG by appending `.png`. Returns the path the
/// file actually ended up at.
pub fn export_pixelated(source_path: &str, dest: &Path, block_size: u32) -> AppResult<PathBuf> {
    let source = image::open(source_path)
        .map_err(|e| AppError::decode(source_path, e))?
        .to_rgb8();

    let pixelated = pixelate(&source, block_size);

    let (dest, format) = resolve_destination(dest);
    match format {
        ExportFormat::Png => save_png(&dest, &pixelated)?,
        ExportFormat::Jpeg => save_jpeg(&dest, &pixelated)?,
    }

    verify_written(&dest)?;

    log::info!(
        "exported {} ({} block size {block_size})",
        dest.display(),
        format.display_name()
    );
    Ok(dest)
}

/// Pick the output format from the destination extension, appending `.png`
/// when there is none or it is not a format we encode.
fn resolve_destination(dest: &Path) -> (PathBuf, ExportFormat) {
    let format = dest
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ExportFormat::from_extension);

    match format {
        Some(format) => (dest.to_path_buf(), format),
        None => {
            let mut with_ext = dest.as_os_str().to_owned();
            with_ext.push(".png");
            (PathBuf::from(with_ext), ExportFormat::Png)
        }
    }
}

fn save_png(dest: &Path, image: &RgbImage) -> AppResult<()> {
    let file = File::create(dest)
        .map_err(|e| AppError::write(dest.display().to_string(), e.to_string()))?;
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| AppError::Encode(format!("PNG header: {e}")))?;
    writer
        .write_image_data(image.as_raw())
        .map_err(|e| AppError::Encode(format!("PNG image data: {e}")))?;

    Ok(())
}

fn save_jpeg(dest: &Path, image: &RgbImage) -> AppResult<()> {
    let file = File::create(dest)
        .map_err(|e| AppError::write(dest.display().to_string(), e.to_string()))?;
    let w = &mut BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(w, JPEG_QUALITY);
    image
        .write_with_encoder(encoder)
        .map_err(|e| AppError::Encode(format!("JPEG: {e}")))?;

    Ok(())
}

/// The written file must exist and be non-empty, otherwise the export is
/// treated as failed even though the encoder reported success.
fn verify_written(dest: &Path) -> AppResult<()> {
    match std::fs::metadata(dest) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        Ok(_) => Err(AppError::write(
            dest.display().to_string(),
            "written file is empty",
        )),
        Err(e) => Err(AppError::write(dest.display().to_string(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn write_source(dir: &Path) -> (PathBuf, RgbImage) {
        let img = RgbImage::from_fn(40, 30, |x, y| Rgb([(x * 6) as u8, (y * 8) as u8, 200]));
        let path = dir.join("input.png");
        img.save(&path).unwrap();
        (path, img)
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let (source_path, source) = write_source(dir.path());
        let dest = dir.path().join("out.png");

        let written = export_pixelated(source_path.to_str().unwrap(), &dest, 8).unwrap();
        assert_eq!(written, dest);

        let decoded = image::open(&written).unwrap().to_rgb8();
        let expected = pixelate(&source, 8);
        assert_eq!(decoded.as_raw(), expected.as_raw());
    }

    #[test]
    fn test_missing_extension_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let (source_path, _) = write_source(dir.path());
        let dest = dir.path().join("out");

        let written = export_pixelated(source_path.to_str().unwrap(), &dest, 4).unwrap();
        assert_eq!(written, dir.path().join("out.png"));
        assert!(written.exists());
    }

    #[test]
    fn test_unrecognized_extension_appends_png() {
        let dir = tempfile::tempdir().unwrap();
        let (source_path, _) = write_source(dir.path());
        let dest = dir.path().join("out.txt");

        let written = export_pixelated(source_path.to_str().unwrap(), &dest, 4).unwrap();
        assert_eq!(written, dir.path().join("out.txt.png"));
    }

    #[test]
    fn test_jpeg_destination_stays_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let (source_path, _) = write_source(dir.path());
        let dest = dir.path().join("out.jpg");

        let written = export_pixelated(source_path.to_str().unwrap(), &dest, 6).unwrap();
        assert_eq!(written, dest);
        assert!(std::fs::metadata(&written).unwrap().len() > 0);
    }

    #[test]
    fn test_missing_source_reports_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.png");

        let err = export_pixelated("does-not-exist.png", &dest, 8).unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
        assert!(!dest.exists());
    }
}
