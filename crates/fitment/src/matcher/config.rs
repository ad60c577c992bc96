use serde::{Deserialize, Serialize};

/// Weights, epsilons and thresholds used by the matchers.
///
/// The defaults are the production tuning; alternate tunings are only meant for
/// experiments and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Weight applied to the tolerance penalty coefficient.
    pub geometry_weight: f64,
    /// Corner radius difference tolerated before the advisory check fails.
    pub corner_radius_epsilon_mm: f64,
    /// Max centre distance between keep-out zone and glass hole, in screen fractions.
    pub cutout_alignment_epsilon: f64,
    /// Display swaps strictly above this confidence are EXACT.
    pub display_exact_threshold: f64,
    /// How far a donor display may exceed the target housing.
    pub housing_slack_mm: f64,
    pub resolution_mismatch_penalty: f64,
    pub refresh_downgrade_penalty: f64,
    pub panel_downgrade_penalty: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            geometry_weight: 0.20,
            corner_radius_epsilon_mm: 0.5,
            cutout_alignment_epsilon: 0.02,
            display_exact_threshold: 0.8,
            housing_slack_mm: 0.5,
            resolution_mismatch_penalty: 0.3,
            refresh_downgrade_penalty: 0.1,
            panel_downgrade_penalty: 0.2,
        }
    }
}
