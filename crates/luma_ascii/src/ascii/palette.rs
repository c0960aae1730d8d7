use std::str::FromStr;

use crate::AsciiError;

/// Ordered glyph ramp, darkest-appearing first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    pub fn new(chars: impl Into<String>) -> Result<Self, AsciiError> {
        let chars: Vec<char> = chars.into().chars().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    pub fn standard() -> Self {
        Self::from_static(" .:-=+*#%@")
    }

    pub fn detailed() -> Self {
        Self::from_static(
            " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$",
        )
    }

    pub fn blocks() -> Self {
        Self::from_static(" ░▒▓█")
    }

    pub fn binary() -> Self {
        Self::from_static(" #")
    }

    fn from_static(chars: &'static str) -> Self {
        Self { chars: chars.chars().collect() }
    }

    /// Same glyphs with the brightness order flipped.
    pub fn reversed(&self) -> Self {
        Self { chars: self.chars.iter().rev().copied().collect() }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn first(&self) -> char {
        self.chars[0]
    }

    pub fn last(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Palette slot for luminosity `value` against the reference maximum `max`.
    ///
    /// Computed as `round(value / max * len) - 1` and clamped into `[0, len - 1]`, so a
    /// luminosity of zero lands on the darkest glyph instead of wrapping around.
    pub fn index_for(&self, value: u8, max: u8) -> usize {
        let last = self.chars.len() - 1;
        if max == 0 {
            return 0;
        }

        let ratio = f64::from(value) / f64::from(max);
        let steps = (ratio * self.chars.len() as f64).round() as i64;
        (steps - 1).clamp(0, last as i64) as usize
    }

    pub fn char_for(&self, value: u8, max: u8) -> char {
        self.chars[self.index_for(value, max)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Palette {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u8 = 255;

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new(""), Err(AsciiError::EmptyPalette)));
        assert!(matches!("".parse::<Palette>(), Err(AsciiError::EmptyPalette)));
    }

    #[test]
    fn test_zero_maps_to_darkest() {
        let palette = Palette::standard();
        assert_eq!(palette.index_for(0, MAX), 0);
        assert_eq!(palette.char_for(0, MAX), ' ');
    }

    #[test]
    fn test_max_maps_to_brightest() {
        let palette = Palette::standard();
        assert_eq!(palette.index_for(MAX, MAX), palette.len() - 1);
        assert_eq!(palette.char_for(MAX, MAX), '@');
    }

    #[test]
    fn test_midpoint() {
        // 128 / 255 * 10 = 5.02 -> 5 steps -> index 4
        assert_eq!(Palette::standard().char_for(128, MAX), '=');
    }

    #[test]
    fn test_monotonic_in_luminosity() {
        for palette in
            [Palette::standard(), Palette::detailed(), Palette::blocks(), Palette::binary()]
        {
            let mut previous = 0;
            for value in 0..=MAX {
                let index = palette.index_for(value, MAX);
                assert!(index >= previous, "index dropped at luminosity {value}");
                assert!(index < palette.len());
                previous = index;
            }
        }
    }

    #[test]
    fn test_single_glyph_palette() {
        let palette = Palette::new("#").unwrap();
        assert_eq!(palette.char_for(0, MAX), '#');
        assert_eq!(palette.char_for(MAX, MAX), '#');
    }

    #[test]
    fn test_zero_max_is_darkest() {
        assert_eq!(Palette::standard().char_for(10, 0), ' ');
    }

    #[test]
    fn test_reversed() {
        let palette = Palette::standard().reversed();
        assert_eq!(palette.first(), '@');
        assert_eq!(palette.last(), ' ');
    }

    #[test]
    fn test_presets_start_dark() {
        assert_eq!(Palette::detailed().len(), 70);
        assert_eq!(Palette::detailed().first(), ' ');
        assert_eq!(Palette::detailed().last(), '$');
        assert_eq!(Palette::blocks().last(), '█');
    }

    #[test]
    fn test_multibyte_glyphs_count_as_one() {
        let palette: Palette = "·•●".parse().unwrap();
        assert_eq!(palette.len(), 3);
    }
}
