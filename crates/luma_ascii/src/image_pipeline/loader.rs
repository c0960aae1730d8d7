use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbImage};
use log::debug;

use crate::AsciiError;

/// Anything that reports its size and yields an RGB triple per coordinate.
///
/// Callers only ask for `0 <= x < width` and `0 <= y < height`.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);
    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

/// Alpha is discarded.
impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        let [red, green, blue, _] = self.get_pixel(x, y).0;
        [red, green, blue]
    }
}

pub fn open<P: AsRef<Path>>(path: P) -> Result<DynamicImage, AsciiError> {
    let path = path.as_ref();
    let image = image::open(path)?;
    debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use image::{Rgb, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_rgb_image_source() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        assert_eq!(PixelSource::dimensions(&image), (3, 2));
        assert_eq!(image.pixel_at(2, 1), [2, 1, 7]);
    }

    #[test]
    fn test_dynamic_image_drops_alpha() {
        let image =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 0])));
        assert_eq!(image.pixel_at(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_open_missing_file() {
        let result = open("definitely/not/here.png");
        assert!(matches!(result, Err(AsciiError::Image(_))));
    }
}
