use serde::{Deserialize, Serialize};

/// Panel profile of a screen or glass part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curvature {
    #[serde(rename = "FLAT")]
    Flat,
    #[serde(rename = "2.5D")]
    TwoPointFiveD,
    #[serde(rename = "CURVED_3D")]
    Curved3d,
    #[serde(rename = "FOLDABLE")]
    Foldable,
}

/// Adhesive and coverage style of a glass SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeCoverage {
    FullGlue,
    BorderGlue,
    CaseFriendly,
    EdgeToEdge,
}

/// Outer or active-area extent in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Dimensions {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// Fit tolerances declared by a screen record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Largest positive glass-minus-screen delta accepted.
    pub max_oversize_mm: f64,
    /// Largest negative delta magnitude accepted.
    pub min_undersize_mm: f64,
    /// Advisory only; the matcher does not score it.
    #[serde(default)]
    pub allowed_misalignment_mm: f64,
}

/// Physical screen module on the target device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub id: String,
    pub dimensions: Dimensions,
    pub active_area: Dimensions,
    pub curvature: Curvature,
    #[serde(default)]
    pub corner_radius_mm: f64,
    /// `none`, `circle(cx, cy, r)` or `rect(x, y, w, h)` in screen fractions.
    #[serde(default, alias = "cutout_mask_svg")]
    pub cutout_mask: String,
    pub fit_tolerances: ToleranceConfig,
}

/// Candidate protective glass part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassGeometry {
    pub sku_code: String,
    pub dimensions: Dimensions,
    pub curvature: Curvature,
    #[serde(default)]
    pub corner_radius_mm: f64,
    #[serde(default, alias = "cutout_mask_svg")]
    pub cutout_mask: String,
    pub edge_coverage: EdgeCoverage,
    #[serde(default, alias = "cutout_alignment_offset_allowance_mm")]
    pub alignment_offset_allowance_mm: f64,
}

/// Previously vetted cross-model substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalRule {
    pub source_screen_id: String,
    pub target_screen_id: String,
    /// 0..=100, assigned by a reviewer or the offline fitting job.
    pub fit_score: f64,
    #[serde(default = "default_rule_safety")]
    pub is_safe: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
}

fn default_rule_safety() -> bool {
    true
}

/// Screen geometry plus the electrical and panel attributes needed for display swaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProfile {
    #[serde(flatten)]
    pub screen: ScreenGeometry,
    /// e.g. `1080x2400`.
    pub display_resolution: String,
    /// Flex connector identifier, e.g. `FPC_SAMS_A54_V1`.
    pub connection_type: String,
    /// e.g. `OLED`, `IPS`.
    pub panel_technology: String,
    pub refresh_rate_hz: u32,
}

impl DisplayProfile {
    pub fn id(&self) -> &str {
        &self.screen.id
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.screen.dimensions
    }
}
