//! Image to text conversion driven by per-pixel luminosity.
//!
//! Every pixel of a resized image is reduced to a Rec. 709 luminosity value, that value
//! selects a glyph from an ordered palette, and the resulting grid is printed with each
//! glyph repeated horizontally to make up for tall terminal cells.

mod ascii;
mod image_pipeline;

use std::io::Write;
use std::path::Path;

use image::DynamicImage;
use log::debug;

pub use ascii::{
    builder::GridBuilder,
    grid::CharGrid,
    luminosity::{luminosity, max_luminosity, pixel_luminosity},
    mapping::GlyphMapper,
    palette::Palette,
    render::{TextRenderer, DEFAULT_STRETCH},
};
pub use image_pipeline::{
    loader::PixelSource,
    resize::{LayoutPolicy, TargetGeometry, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION},
};

use image_pipeline::{loader, resize};

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("palette must contain at least one character")]
    EmptyPalette,
    #[error("stretch factor must be a positive integer")]
    InvalidStretch,
    #[error("unsupported layout dimensions")]
    InvalidLayout,
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct AsciiOptions {
    pub palette: Palette,
    pub layout: LayoutPolicy,
    /// Times each glyph is repeated horizontally on output.
    pub stretch: usize,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            palette: Palette::standard(),
            layout: LayoutPolicy::default(),
            stretch: DEFAULT_STRETCH,
        }
    }
}

impl AsciiOptions {
    /// Checks everything that can be checked before touching an image.
    ///
    /// Palettes are non-empty by construction, so only the layout and stretch are checked.
    pub fn validate(&self) -> Result<TextRenderer, AsciiError> {
        // Any non-degenerate source exercises the layout's own limits.
        self.layout.derive(1, 1).ok_or(AsciiError::InvalidLayout)?;
        TextRenderer::new(self.stretch)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: CharGrid,
    pub geometry: TargetGeometry,
    pub renderer: TextRenderer,
}

impl RenderOutput {
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.renderer.lines(&self.grid)
    }

    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), AsciiError> {
        Ok(self.renderer.write_to(&self.grid, sink)?)
    }

    pub fn to_text(&self) -> String {
        self.renderer.render_to_string(&self.grid)
    }
}

#[derive(Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: &AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        options.validate()?;
        let image = loader::open(path)?;
        self.render_image(&image, options)
    }

    pub fn render_image(
        &self,
        image: &DynamicImage,
        options: &AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let renderer = options.validate()?;

        let geometry = options
            .layout
            .derive(image.width(), image.height())
            .ok_or(AsciiError::InvalidLayout)?;
        debug!("resizing {}x{} to {:?}", image.width(), image.height(), geometry);

        let resized = resize::resize(image, geometry).into_rgb8();
        let grid = GridBuilder::new(options.palette.clone()).build(&resized);

        Ok(RenderOutput { grid, geometry, renderer })
    }

    /// Converts a source that is already at its final size.
    pub fn render_source<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        options: &AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let renderer = options.validate()?;
        let (columns, rows) = source.dimensions();
        let grid = GridBuilder::new(options.palette.clone()).build(source);
        Ok(RenderOutput { grid, geometry: TargetGeometry { columns, rows }, renderer })
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let renderer = AsciiOptions::default().validate().unwrap();
        assert_eq!(renderer.stretch(), 3);
    }

    #[test]
    fn test_zero_stretch_fails_before_decoding() {
        let options = AsciiOptions { stretch: 0, ..AsciiOptions::default() };
        let result = AsciiRenderer.render_path("missing.png", &options);
        assert!(matches!(result, Err(AsciiError::InvalidStretch)));
    }

    #[test]
    fn test_zero_layout_rejected() {
        let options = AsciiOptions {
            layout: LayoutPolicy::Exact { columns: 0, rows: 10 },
            ..AsciiOptions::default()
        };
        assert!(matches!(options.validate(), Err(AsciiError::InvalidLayout)));
    }

    #[test]
    fn test_render_image_uses_layout() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 150, Rgb([255; 3])));
        let output = AsciiRenderer.render_image(&image, &AsciiOptions::default()).unwrap();
        assert_eq!(output.geometry, TargetGeometry { columns: 60, rows: 100 });
        assert_eq!(output.grid.height, 100);
        assert!(output.lines().all(|line| line == "@".repeat(180)));
    }

    #[test]
    fn test_render_source_keeps_size() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(1, 0, Rgb([255; 3]));
        image.put_pixel(0, 1, Rgb([255; 3]));
        let options = AsciiOptions { stretch: 1, ..AsciiOptions::default() };
        let output = AsciiRenderer.render_source(&image, &options).unwrap();
        assert_eq!(output.to_text(), " @\n@ \n");
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let image = DynamicImage::new_rgb8(0, 0);
        let result = AsciiRenderer.render_image(&image, &AsciiOptions::default());
        assert!(matches!(result, Err(AsciiError::InvalidLayout)));
    }
}
