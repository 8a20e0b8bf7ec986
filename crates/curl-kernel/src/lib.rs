//! Pure geometry kernel for a page-curl transition.
//!
//! Two evaluator families cover the same physical idea at different
//! granularities: [`VertexCurl`] deforms mesh vertices on the CPU path, and
//! [`FragmentCurl`] remaps texture coordinates per fragment on the GPU path.
//! Both are pure, stateless functions of a pristine input coordinate and the
//! current curl amount; the driving clock, screenshot capture, and rendering
//! are external collaborators.

pub mod curl;
pub mod fragment;
pub mod geometry;
pub mod plane;

// Re-export key types at crate root for convenience.
pub use curl::{CurlProfile, Drift, ProfileError, VertexCurl};
pub use fragment::{FragmentCurl, FragmentSample, Scenario, Uv};
pub use geometry::{Point3, Vec2};
pub use plane::{GeometryError, PagePlane, PathCoords, RollPath};

use serde::{Deserialize, Serialize};

/// Numeric thresholds for degeneracy handling.
///
/// These separate "degenerate but valid" inputs (handled by falling back to
/// the identity mapping) from genuine contract violations (rejected with a
/// typed error at construction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Lengths below this are degenerate (zero-area plane guard).
    pub degenerate: f64,
    /// Curl amounts below this short-circuit to the flat identity.
    pub flat_amount: f64,
    /// Hairline positive floor for the lift at the curl seam, where
    /// rounding at a full turn would otherwise produce exactly zero.
    pub seam_lift: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            degenerate: 1e-4,
            flat_amount: 1e-4,
            seam_lift: 1e-12,
        }
    }
}

impl Tolerance {
    pub fn is_degenerate_length(&self, length: f64) -> bool {
        length < self.degenerate
    }

    pub fn is_flat_amount(&self, amount: f64) -> bool {
        amount < self.flat_amount
    }
}
