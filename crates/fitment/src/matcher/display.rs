use super::confidence::{ConfidenceScorer, ScoreInputs};
use super::config::EngineConfig;
use super::verdict::{Rejection, Scored, Verdict};
use crate::geometry::{delta, DisplayProfile};

/// Decides whether a donor display can be fitted into the target housing.
///
/// Connector and housing envelope are hard checks. Resolution, refresh rate and panel
/// technology only downgrade confidence; the downgrades go through the shared scorer so
/// the result stays within [0, 1].
pub(crate) fn evaluate(
    target: &DisplayProfile,
    donor: &DisplayProfile,
    config: &EngineConfig,
    scorer: &ConfidenceScorer,
) -> Verdict {
    if target.connection_type != donor.connection_type {
        return reject(format!(
            "Connector Mismatch: Target uses {}, Donor uses {}",
            target.connection_type, donor.connection_type
        ));
    }

    let fit = delta(target.dimensions(), donor.dimensions());
    if fit.width_mm > config.housing_slack_mm || fit.height_mm > config.housing_slack_mm {
        return reject(format!(
            "Donor screen too large for housing (W:{:+.2}mm, H:{:+.2}mm)",
            fit.width_mm, fit.height_mm
        ));
    }

    let mut warnings = Vec::new();
    let mut downgrade = 0.0;

    if target.display_resolution != donor.display_resolution {
        warnings.push(format!(
            "Resolution Mismatch: Target {}, Donor {}. Image may be scaled or cropped.",
            target.display_resolution, donor.display_resolution
        ));
        downgrade += config.resolution_mismatch_penalty;
    }

    if donor.refresh_rate_hz < target.refresh_rate_hz {
        warnings.push(format!(
            "Refresh Rate Downgrade: Target expects {}Hz, Donor is {}Hz.",
            target.refresh_rate_hz, donor.refresh_rate_hz
        ));
        downgrade += config.refresh_downgrade_penalty;
    }

    if target.panel_technology == "OLED" && donor.panel_technology == "IPS" {
        warnings.push(
            "Technology Downgrade: Target expects OLED, Donor is IPS (Thicker/Lower Quality)."
                .to_string(),
        );
        downgrade += config.panel_downgrade_penalty;
    }

    let score = scorer.calculate(&ScoreInputs {
        is_native: target.id() == donor.id(),
        downgrade_penalty: downgrade,
        ..ScoreInputs::new(1.0)
    });

    let scored = Scored {
        confidence: score.value,
        breakdown: score.breakdown,
        warnings,
    };

    if score.value > config.display_exact_threshold {
        Verdict::Exact(scored)
    } else {
        Verdict::Universal(scored)
    }
}

fn reject(reason: String) -> Verdict {
    Verdict::Incompatible(Rejection {
        reasons: vec![reason],
    })
}
