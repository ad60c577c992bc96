use super::verdict::ConfidenceBreakdown;
use crate::geometry::clamp;

/// Inputs to a confidence calculation. Penalties are positive magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreInputs {
    pub base_score: f64,
    /// Tolerance penalty coefficient, weighted by the scorer.
    pub geometry_penalty_coef: f64,
    pub is_native: bool,
    pub cutout_penalty: f64,
    pub curvature_penalty: f64,
    /// Sum of display-swap downgrades.
    pub downgrade_penalty: f64,
}

impl ScoreInputs {
    pub fn new(base_score: f64) -> Self {
        Self {
            base_score,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Clamped to [0, 1].
    pub value: f64,
    pub breakdown: ConfidenceBreakdown,
}

/// Combines a base score with weighted penalties into a clamped confidence.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceScorer {
    geometry_weight: f64,
}

impl ConfidenceScorer {
    pub fn new(geometry_weight: f64) -> Self {
        Self { geometry_weight }
    }

    pub fn calculate(&self, inputs: &ScoreInputs) -> Score {
        let breakdown = ConfidenceBreakdown {
            id_match: if inputs.is_native { 1.0 } else { 0.0 },
            geometry_penalty: negate(inputs.geometry_penalty_coef * self.geometry_weight),
            cutout_penalty: negate(inputs.cutout_penalty),
            curvature_penalty: negate(inputs.curvature_penalty),
            downgrade_penalty: negate(inputs.downgrade_penalty),
            verification_bonus: 0.0,
        };

        Score {
            value: clamp(breakdown.total(inputs.base_score), 0.0, 1.0),
            breakdown,
        }
    }
}

// Keeps zero penalties serialized as 0 rather than -0.
fn negate(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        0.0
    } else {
        -magnitude
    }
}
