//! Perceptual brightness of an RGB pixel.
//!
//! Uses the Rec. 709 relative luminance weights. Green dominates, then red, then blue.

pub const RED_WEIGHT: f64 = 0.2126;
pub const GREEN_WEIGHT: f64 = 0.7152;
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Weighted brightness of a pixel, rounded half away from zero.
pub fn luminosity(red: u8, green: u8, blue: u8) -> u8 {
    let weighted = RED_WEIGHT * f64::from(red)
        + GREEN_WEIGHT * f64::from(green)
        + BLUE_WEIGHT * f64::from(blue);

    // Weights sum to 1.0 so the result never leaves [0, 255].
    weighted.round().clamp(0.0, 255.0) as u8
}

/// Luminosity of a pure white pixel.
///
/// Goes through [`luminosity`] so the reference maximum shares its rounding rule.
pub fn max_luminosity() -> u8 {
    luminosity(u8::MAX, u8::MAX, u8::MAX)
}

pub fn pixel_luminosity([red, green, blue]: [u8; 3]) -> u8 {
    luminosity(red, green, blue)
}
