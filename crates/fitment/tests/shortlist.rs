use approx::assert_relative_eq;
use fitment::geometry::{
    Curvature, Dimensions, EdgeCoverage, GlassGeometry, ScreenGeometry, ToleranceConfig,
    UniversalRule,
};
use fitment::shortlist::{shortlist, GlassCandidate};
use fitment::{CompatibilityEngine, MatchStatus};

fn screen() -> ScreenGeometry {
    ScreenGeometry {
        id: "iphone_13".to_string(),
        dimensions: Dimensions::new(71.5, 146.7),
        active_area: Dimensions::new(70.0, 145.0),
        curvature: Curvature::Flat,
        corner_radius_mm: 4.0,
        cutout_mask: "rect(0.5, 0.03, 0.35, 0.05)".to_string(),
        fit_tolerances: ToleranceConfig {
            max_oversize_mm: 0.0,
            min_undersize_mm: 2.0,
            allowed_misalignment_mm: 0.5,
        },
    }
}

fn candidate(sku: &str, width_mm: f64, rule: Option<UniversalRule>) -> GlassCandidate {
    GlassCandidate {
        glass: GlassGeometry {
            sku_code: sku.to_string(),
            dimensions: Dimensions::new(width_mm, 146.7),
            curvature: Curvature::TwoPointFiveD,
            corner_radius_mm: 4.0,
            cutout_mask: "rect(0.5, 0.03, 0.4, 0.06)".to_string(),
            edge_coverage: EdgeCoverage::CaseFriendly,
            alignment_offset_allowance_mm: 0.3,
        },
        rule,
        marketing_name: Some(format!("{sku} tempered")),
    }
}

fn rule(source: &str, fit_score: f64, is_safe: bool) -> UniversalRule {
    UniversalRule {
        source_screen_id: source.to_string(),
        target_screen_id: "iphone_13".to_string(),
        fit_score,
        is_safe,
        warnings: vec![format!("Borrowed from {source}")],
    }
}

#[test]
fn native_candidates_rank_ahead_of_weaker_universal_ones() {
    let engine = CompatibilityEngine::default();
    let candidates = vec![
        candidate("univ_13_pro", 71.0, Some(rule("iphone_13_pro", 82.0, true))),
        candidate("native_snug", 69.5, None),
        candidate("native_exact", 71.5, None),
        candidate("univ_14", 71.4, Some(rule("iphone_14", 95.0, true))),
    ];

    let list = shortlist(&engine, &screen(), candidates);

    assert_eq!(
        list.ordered_skus(),
        ["native_exact", "univ_14", "native_snug", "univ_13_pro"]
    );
    assert!(list.has_exact_match);
    assert_relative_eq!(list.best_universal_confidence, 0.95, epsilon = 1e-9);
    assert_eq!(list.screen_id, "iphone_13");
}

#[test]
fn unsafe_rules_and_incompatible_glass_are_left_out() {
    let engine = CompatibilityEngine::default();
    let candidates = vec![
        candidate("too_wide", 73.0, None),
        candidate("univ_unsafe", 71.0, Some(rule("iphone_12", 90.0, false))),
        candidate("univ_safe", 71.0, Some(rule("iphone_12", 80.0, true))),
    ];

    let list = shortlist(&engine, &screen(), candidates);

    assert_eq!(list.ordered_skus(), ["univ_safe"]);
    assert!(!list.has_exact_match);
    assert_eq!(list.entries[0].result.status(), MatchStatus::Universal);
}

#[test]
fn a_sku_listed_natively_is_not_repeated_through_a_rule() {
    let engine = CompatibilityEngine::default();
    let candidates = vec![
        candidate("shared_sku", 71.5, Some(rule("iphone_13_mini", 70.0, true))),
        candidate("shared_sku", 71.5, None),
    ];

    let list = shortlist(&engine, &screen(), candidates);

    assert_eq!(list.entries.len(), 1);
    assert_eq!(list.entries[0].result.status(), MatchStatus::Exact);
    assert_eq!(list.best_universal_confidence, 0.0);
}

#[test]
fn entries_serialize_flat() {
    let engine = CompatibilityEngine::default();
    let list = shortlist(&engine, &screen(), vec![candidate("native_exact", 71.5, None)]);

    let value = serde_json::to_value(&list).expect("shortlist serializes");
    let entry = &value["entries"][0];

    assert_eq!(entry["sku_code"], "native_exact");
    assert_eq!(entry["marketing_name"], "native_exact tempered");
    assert_eq!(entry["edge_coverage"], "CASE_FRIENDLY");
    assert_eq!(entry["status"], "EXACT");
    assert_eq!(value["has_exact_match"], true);
}
