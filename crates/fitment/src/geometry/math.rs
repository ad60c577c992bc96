use super::types::Dimensions;

/// Part dimension minus target dimension. Positive means the part is larger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionDelta {
    pub width_mm: f64,
    pub height_mm: f64,
}

pub fn delta(target: &Dimensions, part: &Dimensions) -> DimensionDelta {
    DimensionDelta {
        width_mm: part.width_mm - target.width_mm,
        height_mm: part.height_mm - target.height_mm,
    }
}

/// True when the glass corner radius follows the screen radius within `epsilon_mm`.
pub fn corner_radius_compatible(
    screen_radius_mm: f64,
    glass_radius_mm: f64,
    epsilon_mm: f64,
) -> bool {
    (screen_radius_mm - glass_radius_mm).abs() <= epsilon_mm
}

/// Saturating clamp that never panics on inverted bounds.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
