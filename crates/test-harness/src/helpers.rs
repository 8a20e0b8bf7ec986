//! Helper functions: error types, corner samples, grid builders.

use curl_kernel::{CurlProfile, PagePlane, Uv, Vec2, VertexCurl};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

// ── Evaluator Constructors ──────────────────────────────────────────────────

/// A tall page with an easily distinguishable diagonal, used across the
/// scenario suites.
pub fn standard_plane() -> PagePlane {
    PagePlane::new(4.0, 8.0).expect("standard plane dimensions are valid")
}

pub fn cylindrical_curl(plane: PagePlane) -> VertexCurl {
    VertexCurl::new(plane, CurlProfile::Cylindrical).expect("profile is valid")
}

pub fn elliptical_curl(plane: PagePlane, ratio: f64) -> VertexCurl {
    VertexCurl::new(plane, CurlProfile::elliptical(ratio)).expect("profile is valid")
}

// ── Sample Constructors ─────────────────────────────────────────────────────

/// The four page corners: (bottom-right, bottom-left, top-right, top-left).
pub fn corners(plane: &PagePlane) -> [Vec2; 4] {
    [
        plane.bottom_right(),
        plane.bottom_left(),
        plane.top_right(),
        plane.top_left(),
    ]
}

/// An evenly spaced grid of in-bounds UV samples, `per_side` per axis.
pub fn uv_grid(per_side: usize) -> Vec<Uv> {
    let n = per_side.max(2);
    let mut out = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            out.push(Uv::new(
                col as f64 / (n - 1) as f64,
                row as f64 / (n - 1) as f64,
            ));
        }
    }
    out
}

/// An evenly spaced grid of plane-space samples covering the page.
pub fn plane_grid(plane: &PagePlane, per_side: usize) -> Vec<Vec2> {
    let n = per_side.max(2);
    let mut out = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let fx = col as f64 / (n - 1) as f64 - 0.5;
            let fy = row as f64 / (n - 1) as f64 - 0.5;
            out.push(Vec2::new(fx * plane.width(), fy * plane.height()));
        }
    }
    out
}
