use super::math::{self, DimensionDelta};
use super::types::{GlassGeometry, ScreenGeometry};

/// Result of checking glass dimensions against the screen's declared tolerances.
#[derive(Debug, Clone, PartialEq)]
pub enum ToleranceCheck {
    /// `penalty_coef` is 0 for a perfect fit and reaches 1 at the undersize limit.
    /// It is not clamped here.
    Passed { penalty_coef: f64 },
    Rejected { reason: String },
}

impl ToleranceCheck {
    pub fn passed(&self) -> bool {
        matches!(self, ToleranceCheck::Passed { .. })
    }

    pub fn penalty_coef(&self) -> f64 {
        match self {
            ToleranceCheck::Passed { penalty_coef } => *penalty_coef,
            ToleranceCheck::Rejected { .. } => 1.0,
        }
    }
}

/// Ordered checks, first failure wins: width oversize, height oversize,
/// width undersize, height undersize.
pub fn check_dimensions(screen: &ScreenGeometry, glass: &GlassGeometry) -> ToleranceCheck {
    let DimensionDelta {
        width_mm: width_delta,
        height_mm: height_delta,
    } = math::delta(&screen.dimensions, &glass.dimensions);
    let rules = &screen.fit_tolerances;

    if width_delta > rules.max_oversize_mm {
        return ToleranceCheck::Rejected {
            reason: format!(
                "Glass width too large (+{:.2}mm > max +{}mm)",
                width_delta, rules.max_oversize_mm
            ),
        };
    }
    if height_delta > rules.max_oversize_mm {
        return ToleranceCheck::Rejected {
            reason: format!(
                "Glass height too large (+{:.2}mm > max +{}mm)",
                height_delta, rules.max_oversize_mm
            ),
        };
    }

    if width_delta < 0.0 && width_delta.abs() > rules.min_undersize_mm {
        return ToleranceCheck::Rejected {
            reason: format!(
                "Glass width too narrow ({:.2}mm < -{}mm)",
                width_delta, rules.min_undersize_mm
            ),
        };
    }
    if height_delta < 0.0 && height_delta.abs() > rules.min_undersize_mm {
        return ToleranceCheck::Rejected {
            reason: format!(
                "Glass height too short ({:.2}mm < -{}mm)",
                height_delta, rules.min_undersize_mm
            ),
        };
    }

    let divisor = if rules.min_undersize_mm == 0.0 {
        1.0
    } else {
        rules.min_undersize_mm
    };
    let width_penalty = width_delta.abs() / divisor;
    let height_penalty = height_delta.abs() / divisor;

    ToleranceCheck::Passed {
        penalty_coef: (width_penalty + height_penalty) / 2.0,
    }
}
