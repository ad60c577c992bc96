use super::confidence::{ConfidenceScorer, ScoreInputs};
use super::config::EngineConfig;
use super::rules::{check_curvature, check_cutout};
use super::verdict::{Rejection, Scored, Verdict};
use crate::geometry::{
    check_dimensions, GlassGeometry, ScreenGeometry, ToleranceCheck, UniversalRule,
};

/// Classifies a screen + glass pair.
///
/// Curvature always runs. Without a universal rule the cutout and tolerance checks run
/// too and the pair can only be EXACT or INCOMPATIBLE. With a rule both are skipped, the
/// rule's vetted fit score becomes the base and the pair can only be UNIVERSAL or
/// INCOMPATIBLE.
pub(crate) fn evaluate(
    screen: &ScreenGeometry,
    glass: &GlassGeometry,
    rule: Option<&UniversalRule>,
    config: &EngineConfig,
    scorer: &ConfidenceScorer,
) -> Verdict {
    let mut rejections: Vec<String> = check_curvature(screen, glass)
        .into_reason()
        .into_iter()
        .collect();
    let mut penalty_coef = 0.0;

    if rule.is_none() {
        rejections
            .extend(check_cutout(screen, glass, config.cutout_alignment_epsilon).into_reason());

        match check_dimensions(screen, glass) {
            ToleranceCheck::Passed { penalty_coef: coef } => penalty_coef = coef,
            ToleranceCheck::Rejected { reason } => rejections.push(reason),
        }
    }

    if !rejections.is_empty() {
        return Verdict::Incompatible(Rejection {
            reasons: rejections,
        });
    }

    let (base_score, warnings) = match rule {
        None => (1.0, Vec::new()),
        Some(rule) => (rule.fit_score / 100.0, rule.warnings.clone()),
    };

    let score = scorer.calculate(&ScoreInputs {
        geometry_penalty_coef: penalty_coef,
        is_native: rule.is_none(),
        ..ScoreInputs::new(base_score)
    });

    let scored = Scored {
        confidence: score.value,
        breakdown: score.breakdown,
        warnings,
    };

    match rule {
        None => Verdict::Exact(scored),
        Some(_) => Verdict::Universal(scored),
    }
}
