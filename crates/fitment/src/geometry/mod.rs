//! Geometric primitives shared by the matchers.

pub mod cutout;
pub mod math;
pub mod tolerance;
pub mod types;

pub use cutout::{does_hole_expose_sensor, parse_zone, NormalizedZone, ZoneParseError, ZoneShape};
pub use math::{clamp, corner_radius_compatible, delta, DimensionDelta};
pub use tolerance::{check_dimensions, ToleranceCheck};
pub use types::{
    Curvature, Dimensions, DisplayProfile, EdgeCoverage, GlassGeometry, ScreenGeometry,
    ToleranceConfig, UniversalRule,
};
