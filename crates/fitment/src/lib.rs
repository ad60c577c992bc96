//! Part fitment engine: decides whether replacement tempered glass or a donor display
//! assembly can be fitted onto a target device, with graded confidence and explicit
//! rejection reasons.

pub mod config;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod router;
pub mod shortlist;
pub mod telemetry;

pub use matcher::{CompatibilityEngine, EngineConfig, MatchResult, MatchStatus, Verdict};
