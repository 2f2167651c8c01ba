use image::RgbImage;
use image::imageops::{self, FilterType};

pub const BLOCK_SIZE_MIN: u32 = 2;
pub const BLOCK_SIZE_MAX: u32 = 32;
pub const BLOCK_SIZE_DEFAULT: u32 = 12;

/// Mosaic the image into `block_size`-sized cells.
///
/// Downscales with a bilinear filter so every cell carries the averaged
/// color of its source region, then upscales back to the original size with
/// nearest-neighbor so the cell edges stay hard. Images too small for even
/// one full block come back unchanged.
pub fn pixelate(image: &RgbImage, block_size: u32) -> RgbImage {
    let (width, height) = image.dimensions();

    if block_size <= 1 {
        log::debug!("block size {block_size} is identity, passing image through");
        return image.clone();
    }
    if width / block_size == 0 || height / block_size == 0 {
        log::debug!(
            "block size {block_size} degenerate for {width}x{height}, passing image through"
        );
        return image.clone();
    }

    let down_width = (width / block_size).max(1);
    let down_height = (height / block_size).max(1);

    let small = imageops::resize(image, down_width, down_height, FilterType::Triangle);
    imageops::resize(&small, width, height, FilterType::Nearest)
}

/// Clamp a requested block size into the supported range.
pub fn clamp_block_size(size: u32) -> u32 {
    size.clamp(BLOCK_SIZE_MIN, BLOCK_SIZE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::collections::HashSet;

    fn gradient_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, (x + y) as u8])
        })
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let img = gradient_image(100, 60);
        for block_size in BLOCK_SIZE_MIN..=BLOCK_SIZE_MAX {
            let out = pixelate(&img, block_size);
            assert_eq!(out.dimensions(), (100, 60), "block size {block_size}");
        }
    }

    #[test]
    fn test_deterministic() {
        let img = gradient_image(64, 64);
        let a = pixelate(&img, 7);
        let b = pixelate(&img, 7);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_input_not_mutated() {
        let img = gradient_image(32, 32);
        let before = img.as_raw().clone();
        let _ = pixelate(&img, 8);
        assert_eq!(img.as_raw(), &before);
    }

    #[test]
    fn test_degenerate_block_size_is_identity() {
        // 10 / 20 == 0, so the transform must pass the image through.
        let img = gradient_image(10, 10);
        let out = pixelate(&img, 20);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn test_degenerate_single_axis_is_identity() {
        let img = gradient_image(100, 10);
        let out = pixelate(&img, 16);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn test_tiny_block_size_is_identity() {
        let img = gradient_image(16, 16);
        assert_eq!(pixelate(&img, 1).as_raw(), img.as_raw());
        assert_eq!(pixelate(&img, 0).as_raw(), img.as_raw());
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let img = RgbImage::from_pixel(60, 40, Rgb([120, 200, 37]));
        for block_size in [2, 12, 32] {
            let out = pixelate(&img, block_size);
            for pixel in out.pixels() {
                for (got, want) in pixel.0.iter().zip([120u8, 200, 37]) {
                    assert!(
                        got.abs_diff(want) <= 1,
                        "block size {block_size}: {got} vs {want}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_detail_bounded_by_downscaled_grid() {
        let img = gradient_image(256, 256);
        let out = pixelate(&img, 2);
        let distinct: HashSet<[u8; 3]> = out.pixels().map(|p| p.0).collect();
        assert!(distinct.len() <= 128 * 128, "{} colors", distinct.len());
    }

    #[test]
    fn test_clamp_block_size() {
        assert_eq!(clamp_block_size(0), BLOCK_SIZE_MIN);
        assert_eq!(clamp_block_size(1), BLOCK_SIZE_MIN);
        assert_eq!(clamp_block_size(12), 12);
        assert_eq!(clamp_block_size(100), BLOCK_SIZE_MAX);
    }
}
