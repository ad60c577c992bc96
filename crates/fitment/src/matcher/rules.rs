//! Hard rules. Any failure rejects the pair outright.

use crate::geometry::{
    does_hole_expose_sensor, parse_zone, Curvature, GlassGeometry, ScreenGeometry,
};

pub const FLAT_ON_CURVED: &str = "Cannot put Flat Glass on Curved Screen (Lifting/Halo Risk)";
pub const TWO_POINT_FIVE_D_ON_CURVED: &str = "2.5D Glass insufficient for 3D Curved Screen";
pub const CURVED_ON_FLAT: &str = "Curved Glass on Flat Screen (Edge Mismatch)";
pub const SENSOR_BLOCKED: &str = "Glass blocks screen sensor (No Cutout)";
pub const CUTOUT_MISALIGNED: &str = "Glass cutout misaligned or too small for sensor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Reject(String),
}

impl RuleOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, RuleOutcome::Pass)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            RuleOutcome::Pass => None,
            RuleOutcome::Reject(reason) => Some(reason),
        }
    }

    pub(crate) fn into_reason(self) -> Option<String> {
        match self {
            RuleOutcome::Pass => None,
            RuleOutcome::Reject(reason) => Some(reason),
        }
    }
}

/// Combinations not listed here pass.
pub fn check_curvature(screen: &ScreenGeometry, glass: &GlassGeometry) -> RuleOutcome {
    match (screen.curvature, glass.curvature) {
        (Curvature::Curved3d | Curvature::Foldable, Curvature::Flat) => {
            RuleOutcome::Reject(FLAT_ON_CURVED.to_string())
        }
        (Curvature::Curved3d, Curvature::TwoPointFiveD) => {
            RuleOutcome::Reject(TWO_POINT_FIVE_D_ON_CURVED.to_string())
        }
        (Curvature::Flat, Curvature::Curved3d) => RuleOutcome::Reject(CURVED_ON_FLAT.to_string()),
        _ => RuleOutcome::Pass,
    }
}

/// A screen without a keep-out zone accepts any glass. Otherwise the glass needs an
/// aligned hole at least as large as the zone.
pub fn check_cutout(
    screen: &ScreenGeometry,
    glass: &GlassGeometry,
    alignment_epsilon: f64,
) -> RuleOutcome {
    let Some(keep_out) = parse_zone(&screen.cutout_mask) else {
        return RuleOutcome::Pass;
    };

    let Some(hole) = parse_zone(&glass.cutout_mask) else {
        return RuleOutcome::Reject(SENSOR_BLOCKED.to_string());
    };

    if does_hole_expose_sensor(&keep_out, &hole, alignment_epsilon) {
        RuleOutcome::Pass
    } else {
        RuleOutcome::Reject(CUTOUT_MISALIGNED.to_string())
    }
}
