use image::imageops::FilterType;
use image::DynamicImage;

/// Grid size an image is resampled to before conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    pub columns: u32,
    pub rows: u32,
}

pub const DEFAULT_COLUMNS: u32 = 60;
pub const DEFAULT_ROWS: u32 = 100;
/// Upper bound on either grid dimension.
pub const MAX_DIMENSION: u32 = 4096;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutPolicy {
    /// Resample to exactly this many columns and rows, ignoring the source aspect ratio.
    Exact { columns: u32, rows: u32 },
    /// Keep the source aspect ratio. `cell_aspect` is the height / width ratio of one
    /// rendered cell, after horizontal stretching.
    FixedColumns { columns: u32, cell_aspect: f32 },
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        LayoutPolicy::Exact { columns: DEFAULT_COLUMNS, rows: DEFAULT_ROWS }
    }
}

impl LayoutPolicy {
    pub fn derive(&self, source_width: u32, source_height: u32) -> Option<TargetGeometry> {
        if source_width == 0 || source_height == 0 {
            return None;
        }

        match *self {
            LayoutPolicy::Exact { columns, rows } => {
                let limits = 1..=MAX_DIMENSION;
                if !limits.contains(&columns) || !limits.contains(&rows) {
                    return None;
                }
                Some(TargetGeometry { columns, rows })
            },
            LayoutPolicy::FixedColumns { columns, cell_aspect } => {
                if !(1..=MAX_DIMENSION).contains(&columns)
                    || !(cell_aspect.is_finite() && cell_aspect > 0.0)
                {
                    return None;
                }
                let image_ratio = source_height as f64 / source_width as f64;
                let rows = (image_ratio * f64::from(columns) / f64::from(cell_aspect)).round();
                if rows > f64::from(MAX_DIMENSION) {
                    return None;
                }
                Some(TargetGeometry { columns, rows: (rows as u32).max(1) })
            },
        }
    }
}

pub fn resize(image: &DynamicImage, geometry: TargetGeometry) -> DynamicImage {
    image.resize_exact(geometry.columns, geometry.rows, FilterType::CatmullRom)
}
