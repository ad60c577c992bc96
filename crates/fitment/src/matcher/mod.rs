//! Compatibility verdicts for replacement glass and donor displays.
//!
//! The engine is a pure function of its inputs apart from the timestamp supplied by its
//! [`Clock`]. It holds no mutable state and can be shared freely across threads.

pub mod clock;
pub mod confidence;
pub mod config;
mod display;
mod glass;
pub mod rules;
pub mod verdict;

pub use clock::{Clock, FixedClock, SystemClock};
pub use confidence::{ConfidenceScorer, Score, ScoreInputs};
pub use config::EngineConfig;
pub use rules::RuleOutcome;
pub use verdict::{
    ConfidenceBreakdown, MatchMetadata, MatchResult, MatchResultView, MatchStatus, Rejection,
    Scored, Verdict,
};

use crate::geometry::{
    corner_radius_compatible, DisplayProfile, GlassGeometry, ScreenGeometry, UniversalRule,
};
use tracing::{debug, warn};

/// Stateless evaluator applying one [`EngineConfig`] to candidate pairs.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine<C = SystemClock> {
    config: EngineConfig,
    scorer: ConfidenceScorer,
    clock: C,
}

impl CompatibilityEngine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for CompatibilityEngine<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> CompatibilityEngine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        let scorer = ConfidenceScorer::new(config.geometry_weight);
        Self {
            config,
            scorer,
            clock,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify a screen + glass pair as EXACT, UNIVERSAL or INCOMPATIBLE.
    ///
    /// Supplying a universal rule switches to the rule's trust model: cutout and
    /// tolerance gating are skipped and the result is never EXACT.
    pub fn match_glass(
        &self,
        screen: &ScreenGeometry,
        glass: &GlassGeometry,
        rule: Option<&UniversalRule>,
    ) -> MatchResult {
        if let Some(rule) = rule {
            if rule.target_screen_id != screen.id {
                warn!(
                    screen_id = %screen.id,
                    rule_target = %rule.target_screen_id,
                    "universal rule targets a different screen"
                );
            }
        }

        if !corner_radius_compatible(
            screen.corner_radius_mm,
            glass.corner_radius_mm,
            self.config.corner_radius_epsilon_mm,
        ) {
            debug!(
                screen_id = %screen.id,
                sku = %glass.sku_code,
                screen_radius_mm = screen.corner_radius_mm,
                glass_radius_mm = glass.corner_radius_mm,
                "corner radius outside advisory epsilon"
            );
        }

        let verdict = glass::evaluate(screen, glass, rule, &self.config, &self.scorer);
        let is_native = matches!(verdict, Verdict::Exact(_));
        let result = self.stamp(verdict, is_native);

        debug!(
            screen_id = %screen.id,
            sku = %glass.sku_code,
            status = result.status().label(),
            confidence = result.confidence(),
            "glass match evaluated"
        );
        result
    }

    /// Decide whether `donor` can replace the display of `target`.
    pub fn match_display(&self, target: &DisplayProfile, donor: &DisplayProfile) -> MatchResult {
        let verdict = display::evaluate(target, donor, &self.config, &self.scorer);
        let is_native = !matches!(verdict, Verdict::Incompatible(_)) && target.id() == donor.id();
        let result = self.stamp(verdict, is_native);

        debug!(
            target_id = %target.id(),
            donor_id = %donor.id(),
            status = result.status().label(),
            confidence = result.confidence(),
            "display swap evaluated"
        );
        result
    }

    fn stamp(&self, verdict: Verdict, is_native: bool) -> MatchResult {
        MatchResult {
            verdict,
            metadata: MatchMetadata {
                is_native,
                computed_at: self.clock.now(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Curvature, Dimensions, EdgeCoverage, ToleranceConfig};
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn engine() -> CompatibilityEngine<FixedClock> {
        let instant = Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
            .single()
            .expect("valid instant");
        CompatibilityEngine::with_clock(EngineConfig::default(), FixedClock(instant))
    }

    fn punch_hole_screen() -> ScreenGeometry {
        ScreenGeometry {
            id: "screen_ph_01".to_string(),
            dimensions: Dimensions::new(72.0, 160.0),
            active_area: Dimensions::new(71.0, 159.0),
            curvature: Curvature::Flat,
            corner_radius_mm: 2.5,
            cutout_mask: "circle(0.5, 0.1, 0.05)".to_string(),
            fit_tolerances: ToleranceConfig {
                max_oversize_mm: 0.0,
                min_undersize_mm: 2.0,
                allowed_misalignment_mm: 0.5,
            },
        }
    }

    fn glass(sku: &str, width_mm: f64, height_mm: f64, cutout_mask: &str) -> GlassGeometry {
        GlassGeometry {
            sku_code: sku.to_string(),
            dimensions: Dimensions::new(width_mm, height_mm),
            curvature: Curvature::Flat,
            corner_radius_mm: 2.5,
            cutout_mask: cutout_mask.to_string(),
            edge_coverage: EdgeCoverage::FullGlue,
            alignment_offset_allowance_mm: 0.5,
        }
    }

    fn rule(fit_score: f64) -> UniversalRule {
        UniversalRule {
            source_screen_id: "screen_other".to_string(),
            target_screen_id: "screen_ph_01".to_string(),
            fit_score,
            is_safe: true,
            warnings: vec!["Slight gap near camera".to_string()],
        }
    }

    #[test]
    fn matching_punch_hole_is_exact() {
        let result = engine().match_glass(
            &punch_hole_screen(),
            &glass("ph", 72.0, 160.0, "circle(0.5, 0.1, 0.05)"),
            None,
        );

        assert_eq!(result.status(), MatchStatus::Exact);
        assert_eq!(result.confidence(), 1.0);
        assert_eq!(result.breakdown().cutout_penalty, 0.0);
        assert!(result.is_native());
    }

    #[test]
    fn rejections_are_collected_not_short_circuited() {
        let mut screen = punch_hole_screen();
        screen.curvature = Curvature::Curved3d;

        let result = engine().match_glass(&screen, &glass("bad", 80.0, 160.0, "none"), None);

        assert_eq!(
            result.rejection_reasons(),
            [
                rules::FLAT_ON_CURVED.to_string(),
                rules::SENSOR_BLOCKED.to_string(),
                "Glass width too large (+8.00mm > max +0mm)".to_string(),
            ]
        );
        assert_eq!(result.confidence(), 0.0);
        assert!(result.warnings().is_empty());
        assert!(!result.is_native());
    }

    #[test]
    fn universal_rule_skips_cutout_and_tolerance_gates() {
        let result = engine().match_glass(
            &punch_hole_screen(),
            &glass("univ", 60.0, 150.0, "none"),
            Some(&rule(85.0)),
        );

        assert_eq!(result.status(), MatchStatus::Universal);
        assert_relative_eq!(result.confidence(), 0.85, epsilon = 1e-9);
        assert_eq!(result.breakdown().geometry_penalty, 0.0);
        assert_eq!(result.breakdown().id_match, 0.0);
        assert_eq!(result.warnings(), ["Slight gap near camera".to_string()]);
        assert!(!result.is_native());
    }

    #[test]
    fn universal_rule_still_enforces_curvature() {
        let mut screen = punch_hole_screen();
        screen.curvature = Curvature::Foldable;

        let result = engine().match_glass(
            &screen,
            &glass("univ", 72.0, 160.0, "circle(0.5, 0.1, 0.05)"),
            Some(&rule(95.0)),
        );

        assert_eq!(result.status(), MatchStatus::Incompatible);
        assert_eq!(result.rejection_reasons(), [rules::FLAT_ON_CURVED.to_string()]);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn fit_score_above_hundred_is_clamped() {
        let result = engine().match_glass(
            &punch_hole_screen(),
            &glass("univ", 72.0, 160.0, "none"),
            Some(&rule(120.0)),
        );

        assert_eq!(result.status(), MatchStatus::Universal);
        assert_eq!(result.confidence(), 1.0);
    }

    #[test]
    fn corner_radius_mismatch_is_advisory() {
        let mut part = glass("round", 72.0, 160.0, "circle(0.5, 0.1, 0.05)");
        part.corner_radius_mm = 6.0;

        let result = engine().match_glass(&punch_hole_screen(), &part, None);

        assert_eq!(result.status(), MatchStatus::Exact);
        assert_eq!(result.confidence(), 1.0);
    }

    #[test]
    fn alternate_tuning_changes_geometry_weight() {
        let config = EngineConfig {
            geometry_weight: 0.5,
            ..EngineConfig::default()
        };
        let engine = CompatibilityEngine::with_clock(config, FixedClock(Utc::now()));

        let result = engine.match_glass(
            &punch_hole_screen(),
            &glass("small", 71.0, 159.0, "circle(0.5, 0.1, 0.05)"),
            None,
        );

        assert_eq!(result.status(), MatchStatus::Exact);
        assert_relative_eq!(result.breakdown().geometry_penalty, -0.25, epsilon = 1e-9);
        assert_relative_eq!(result.confidence(), 0.75, epsilon = 1e-9);
    }

    #[test]
    fn results_carry_clock_instant() {
        let engine = engine();
        let result = engine.match_glass(
            &punch_hole_screen(),
            &glass("ph", 72.0, 160.0, "circle(0.5, 0.1, 0.05)"),
            None,
        );

        assert_eq!(result.metadata.computed_at, engine.clock.now());
    }
}
