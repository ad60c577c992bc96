//! Per-screen candidate shortlist.
//!
//! Native candidates are evaluated first, then cross-model candidates carried by
//! universal rules. Incompatible candidates are dropped and the rest ranked by
//! confidence, the way the precomputation job stores them for lookup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{EdgeCoverage, GlassGeometry, ScreenGeometry, UniversalRule};
use crate::matcher::{Clock, CompatibilityEngine, MatchResult, MatchStatus};

/// Glass SKU offered for a screen, optionally through a universal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassCandidate {
    pub glass: GlassGeometry,
    #[serde(default)]
    pub rule: Option<UniversalRule>,
    #[serde(default)]
    pub marketing_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistEntry {
    pub sku_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_name: Option<String>,
    pub edge_coverage: EdgeCoverage,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortlist {
    pub screen_id: String,
    pub entries: Vec<ShortlistEntry>,
    pub has_exact_match: bool,
    pub best_universal_confidence: f64,
}

impl Shortlist {
    /// SKU codes in ranked order.
    pub fn ordered_skus(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.sku_code.as_str())
            .collect()
    }
}

pub fn shortlist<C, I>(
    engine: &CompatibilityEngine<C>,
    screen: &ScreenGeometry,
    candidates: I,
) -> Shortlist
where
    C: Clock,
    I: IntoIterator<Item = GlassCandidate>,
{
    let (native, universal): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|candidate| candidate.rule.is_none());

    let mut accepted = HashSet::new();
    let mut entries = Vec::new();

    for candidate in native.into_iter().chain(universal) {
        if accepted.contains(&candidate.glass.sku_code) {
            continue;
        }
        if let Some(rule) = candidate.rule.as_ref().filter(|rule| !rule.is_safe) {
            debug!(
                screen_id = %screen.id,
                sku = %candidate.glass.sku_code,
                source_screen_id = %rule.source_screen_id,
                "skipping universal rule not marked safe"
            );
            continue;
        }

        let result = engine.match_glass(screen, &candidate.glass, candidate.rule.as_ref());
        if !result.is_compatible() {
            continue;
        }

        accepted.insert(candidate.glass.sku_code.clone());
        entries.push(ShortlistEntry {
            sku_code: candidate.glass.sku_code,
            marketing_name: candidate.marketing_name,
            edge_coverage: candidate.glass.edge_coverage,
            result,
        });
    }

    entries.sort_by(|a, b| b.result.confidence().total_cmp(&a.result.confidence()));

    let has_exact_match = entries
        .iter()
        .any(|entry| entry.result.status() == MatchStatus::Exact);
    let best_universal_confidence = entries
        .iter()
        .filter(|entry| entry.result.status() == MatchStatus::Universal)
        .map(|entry| entry.result.confidence())
        .fold(0.0, f64::max);

    Shortlist {
        screen_id: screen.id.clone(),
        entries,
        has_exact_match,
        best_universal_confidence,
    }
}
