use log::debug;

use super::{grid::CharGrid, luminosity::pixel_luminosity, mapping::GlyphMapper, palette::Palette};
use crate::image_pipeline::loader::PixelSource;

/// Turns every pixel of a source into one palette glyph.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    mapper: GlyphMapper,
}

impl GridBuilder {
    pub fn new(palette: Palette) -> Self {
        Self { mapper: GlyphMapper::new(palette) }
    }

    pub fn build<S: PixelSource + ?Sized>(&self, source: &S) -> CharGrid {
        let (width, height) = source.dimensions();
        debug!(
            "building {width}x{height} grid with {} glyphs (max luminosity {})",
            self.mapper.palette().len(),
            self.mapper.max_luminosity()
        );

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let luminosity = pixel_luminosity(source.pixel_at(x, y));
                cells.push(self.mapper.map(luminosity));
            }
        }

        CharGrid::new(width, height, cells)
    }
}
