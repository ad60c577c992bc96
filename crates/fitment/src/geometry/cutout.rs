//! Cutout masks: keep-out zones on screens and holes in glass.
//!
//! Masks are stored as compact descriptors in normalized screen coordinates:
//! `none`, `circle(cx, cy, r)` or `rect(x, y, w, h)`, every value a plain decimal in
//! `[0, 1]`. Containment is approximated with centre distance and extent, not full
//! outline intersection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneShape {
    Circle,
    Rect,
}

/// Parsed cutout in 0..1 screen fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedZone {
    pub shape: ZoneShape,
    pub x: f64,
    pub y: f64,
    /// Radius for circles, width for rectangles.
    pub extent: f64,
    /// Zero for circles.
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoneParseError {
    #[error("unknown cutout shape in '{0}'")]
    UnknownShape(String),
    #[error("{shape} cutout expects {expected} values, found {found}")]
    Arity {
        shape: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid cutout coordinate '{0}'")]
    InvalidNumber(String),
}

impl FromStr for NormalizedZone {
    type Err = ZoneParseError;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let trimmed = descriptor.trim();
        let open = trimmed
            .find('(')
            .ok_or_else(|| ZoneParseError::UnknownShape(trimmed.to_string()))?;
        let args = trimmed[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| ZoneParseError::UnknownShape(trimmed.to_string()))?;

        let (shape, label, expected) = match trimmed[..open].trim().to_ascii_lowercase().as_str() {
            "circle" => (ZoneShape::Circle, "circle", 3),
            "rect" => (ZoneShape::Rect, "rect", 4),
            _ => return Err(ZoneParseError::UnknownShape(trimmed.to_string())),
        };

        let values = args
            .split(',')
            .map(|raw| {
                let raw = raw.trim();
                Some(raw)
                    .filter(|raw| raw.chars().all(|c| c.is_ascii_digit() || c == '.'))
                    .and_then(|raw| raw.parse::<f64>().ok())
                    .filter(|value| (0.0..=1.0).contains(value))
                    .ok_or_else(|| ZoneParseError::InvalidNumber(raw.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != expected {
            return Err(ZoneParseError::Arity {
                shape: label,
                expected,
                found: values.len(),
            });
        }

        Ok(NormalizedZone {
            shape,
            x: values[0],
            y: values[1],
            extent: values[2],
            height: if shape == ZoneShape::Rect { values[3] } else { 0.0 },
        })
    }
}

/// Parse a mask descriptor. `none`, empty and unrecognized descriptors mean "no constraint".
pub fn parse_zone(descriptor: &str) -> Option<NormalizedZone> {
    let trimmed = descriptor.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }

    match trimmed.parse() {
        Ok(zone) => Some(zone),
        Err(err) => {
            debug!(descriptor = trimmed, error = %err, "ignoring unparseable cutout mask");
            None
        }
    }
}

/// True when the glass hole is centred on the keep-out zone (within `alignment_epsilon`)
/// and at least as large as it.
pub fn does_hole_expose_sensor(
    screen_keep_out: &NormalizedZone,
    glass_hole: &NormalizedZone,
    alignment_epsilon: f64,
) -> bool {
    let distance = (screen_keep_out.x - glass_hole.x).hypot(screen_keep_out.y - glass_hole.y);
    if distance > alignment_epsilon {
        return false;
    }

    glass_hole.extent >= screen_keep_out.extent
}
