use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    Exact,
    Universal,
    Incompatible,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Exact => "EXACT",
            MatchStatus::Universal => "UNIVERSAL",
            MatchStatus::Incompatible => "INCOMPATIBLE",
        }
    }
}

/// Additive components of a confidence score. Penalties are stored negated.
/// `id_match` is informational and never summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub id_match: f64,
    pub geometry_penalty: f64,
    pub cutout_penalty: f64,
    pub curvature_penalty: f64,
    pub downgrade_penalty: f64,
    pub verification_bonus: f64,
}

impl ConfidenceBreakdown {
    /// Sum of the additive components on top of a base score, before clamping.
    pub fn total(&self, base_score: f64) -> f64 {
        base_score
            + self.geometry_penalty
            + self.cutout_penalty
            + self.curvature_penalty
            + self.downgrade_penalty
            + self.verification_bonus
    }
}

/// Payload of a successful verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub confidence: f64,
    pub breakdown: ConfidenceBreakdown,
    pub warnings: Vec<String>,
}

/// Payload of a rejection. `reasons` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub reasons: Vec<String>,
}

/// Outcome of one compatibility check.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Exact(Scored),
    Universal(Scored),
    Incompatible(Rejection),
}

impl Verdict {
    pub fn status(&self) -> MatchStatus {
        match self {
            Verdict::Exact(_) => MatchStatus::Exact,
            Verdict::Universal(_) => MatchStatus::Universal,
            Verdict::Incompatible(_) => MatchStatus::Incompatible,
        }
    }

    fn scored(&self) -> Option<&Scored> {
        match self {
            Verdict::Exact(scored) | Verdict::Universal(scored) => Some(scored),
            Verdict::Incompatible(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub is_native: bool,
    pub computed_at: DateTime<Utc>,
}

/// Verdict plus metadata. Only `metadata.computed_at` varies between identical calls.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub verdict: Verdict,
    pub metadata: MatchMetadata,
}

impl MatchResult {
    pub fn status(&self) -> MatchStatus {
        self.verdict.status()
    }

    pub fn is_compatible(&self) -> bool {
        !matches!(self.verdict, Verdict::Incompatible(_))
    }

    /// Clamped confidence; 0 for rejections.
    pub fn confidence(&self) -> f64 {
        self.verdict
            .scored()
            .map(|scored| scored.confidence)
            .unwrap_or(0.0)
    }

    /// All-zero for rejections.
    pub fn breakdown(&self) -> ConfidenceBreakdown {
        self.verdict
            .scored()
            .map(|scored| scored.breakdown)
            .unwrap_or_default()
    }

    pub fn warnings(&self) -> &[String] {
        self.verdict
            .scored()
            .map(|scored| scored.warnings.as_slice())
            .unwrap_or(&[])
    }

    pub fn rejection_reasons(&self) -> &[String] {
        match &self.verdict {
            Verdict::Incompatible(rejection) => &rejection.reasons,
            _ => &[],
        }
    }

    pub fn is_native(&self) -> bool {
        self.metadata.is_native
    }

    pub fn view(&self) -> MatchResultView {
        MatchResultView {
            status: self.status(),
            confidence: self.confidence(),
            confidence_breakdown: self.breakdown(),
            warnings: self.warnings().to_vec(),
            rejection_reasons: self.rejection_reasons().to_vec(),
            metadata: self.metadata,
        }
    }
}

/// Flat wire shape persisted and returned by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResultView {
    pub status: MatchStatus,
    pub confidence: f64,
    pub confidence_breakdown: ConfidenceBreakdown,
    pub warnings: Vec<String>,
    pub rejection_reasons: Vec<String>,
    pub metadata: MatchMetadata,
}

impl Serialize for MatchResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.view().serialize(serializer)
    }
}
