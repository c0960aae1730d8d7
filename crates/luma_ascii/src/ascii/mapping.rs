use super::{luminosity::max_luminosity, palette::Palette};

/// Maps luminosity values onto a palette against a fixed reference maximum.
#[derive(Clone, Debug)]
pub struct GlyphMapper {
    palette: Palette,
    max_luminosity: u8,
}

impl GlyphMapper {
    pub fn new(palette: Palette) -> Self {
        Self { palette, max_luminosity: max_luminosity() }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn max_luminosity(&self) -> u8 {
        self.max_luminosity
    }

    pub fn map(&self, luminosity: u8) -> char {
        self.palette.char_for(luminosity, self.max_luminosity)
    }
}
