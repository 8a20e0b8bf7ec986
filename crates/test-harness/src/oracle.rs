//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a caller collect all failures in one pass.

use curl_kernel::{FragmentCurl, PagePlane, Scenario, Uv, Vec2, VertexCurl};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }
}

/// Every sample must map to itself with zero lift at amount = 0.
pub fn check_identity_at_rest(curl: &VertexCurl, samples: &[Vec2]) -> OracleVerdict {
    const NAME: &str = "identity_at_rest";
    for s in samples {
        let p = curl.evaluate(s.x, s.y, 0.0);
        if p.x != s.x || p.y != s.y || p.z != 0.0 {
            return OracleVerdict::fail(
                NAME,
                format!("sample ({}, {}) moved to {:?} at amount 0", s.x, s.y, p),
            );
        }
    }
    OracleVerdict::pass(NAME, format!("{} samples reproduced exactly", samples.len()))
}

/// At amount = 1 the curl origin corner must land on the target corner with
/// a strictly positive lift.
pub fn check_corner_transport(curl: &VertexCurl, plane: &PagePlane) -> OracleVerdict {
    const NAME: &str = "corner_transport";
    const XY_TOL: f64 = 1e-6;
    let br = plane.bottom_right();
    let tl = plane.top_left();
    let p = curl.evaluate(br.x, br.y, 1.0);

    if (p.x - tl.x).abs() > XY_TOL || (p.y - tl.y).abs() > XY_TOL {
        return OracleVerdict::fail(
            NAME,
            format!(
                "origin corner landed at ({}, {}), expected ({}, {})",
                p.x, p.y, tl.x, tl.y
            ),
        );
    }
    if p.z <= 0.0 {
        return OracleVerdict::fail(NAME, format!("seam lift is not positive: {}", p.z));
    }
    OracleVerdict::pass_val(NAME, "origin corner transported onto target".to_string(), p.z)
}

/// The origin corner's y must rise strictly as the amount grows.
pub fn check_monotonic_lift(curl: &VertexCurl, plane: &PagePlane, steps: usize) -> OracleVerdict {
    const NAME: &str = "monotonic_lift";
    let br = plane.bottom_right();
    let mut prev = curl.evaluate(br.x, br.y, 0.0).y;
    for step in 1..=steps {
        let amount = step as f64 / (steps + 1) as f64;
        let y = curl.evaluate(br.x, br.y, amount).y;
        if y <= prev {
            return OracleVerdict::fail(
                NAME,
                format!("y {} did not rise past {} at amount {}", y, prev, amount),
            );
        }
        prev = y;
    }
    OracleVerdict::pass_val(NAME, format!("y rose over {} steps", steps), prev)
}

/// The curl initiates from the origin edge: at a quarter of the target the
/// bottom-right corner sits above the bottom-left one.
pub fn check_leading_edge_order(curl: &VertexCurl, plane: &PagePlane) -> OracleVerdict {
    const NAME: &str = "leading_edge_order";
    let amount = 0.25;
    let br = plane.bottom_right();
    let bl = plane.bottom_left();
    let right = curl.evaluate(br.x, br.y, amount);
    let left = curl.evaluate(bl.x, bl.y, amount);
    if right.y > left.y {
        OracleVerdict::pass_val(
            NAME,
            "bottom-right leads the bottom-left".to_string(),
            right.y - left.y,
        )
    } else {
        OracleVerdict::fail(
            NAME,
            format!("bottom-right y {} <= bottom-left y {}", right.y, left.y),
        )
    }
}

/// Corners opposite the curl origin must be untouched below full wrap.
pub fn check_far_corner_fixity(curl: &VertexCurl, plane: &PagePlane) -> OracleVerdict {
    const NAME: &str = "far_corner_fixity";
    let amount = 0.25;
    for corner in [plane.top_left(), plane.top_right()] {
        let p = curl.evaluate(corner.x, corner.y, amount);
        if p.x != corner.x || p.y != corner.y || p.z != 0.0 {
            return OracleVerdict::fail(
                NAME,
                format!("corner ({}, {}) moved to {:?}", corner.x, corner.y, p),
            );
        }
    }
    OracleVerdict::pass(NAME, "both far corners fixed".to_string())
}

/// Out-of-bounds UVs must be discarded at every amount.
pub fn check_fragment_bounds_discard(fragment: &FragmentCurl) -> OracleVerdict {
    const NAME: &str = "fragment_bounds_discard";
    let outside = [
        Uv::new(-0.1, 0.5),
        Uv::new(1.1, 0.5),
        Uv::new(0.5, -0.01),
        Uv::new(0.5, 1.01),
    ];
    for uv in outside {
        for step in 0..=15 {
            let amount = step as f64 * 0.1;
            let sample = fragment.evaluate(uv, amount);
            if sample.visible {
                return OracleVerdict::fail(
                    NAME,
                    format!("uv {:?} visible at amount {}", uv, amount),
                );
            }
        }
    }
    OracleVerdict::pass(NAME, "all out-of-bounds samples discarded".to_string())
}

/// As the amount grows, a fragment must walk the spatial phases
/// flat -> on-curl -> under-curl without ever backtracking. The two on-curl
/// faces share a phase: the back face takes over from the front face (or
/// vice versa) as the unrolled candidates cross the page boundary, but
/// neither may reappear once the fragment is under the curl.
pub fn check_scenario_progression(fragment: &FragmentCurl, uv: Uv, steps: usize) -> OracleVerdict {
    const NAME: &str = "scenario_progression";
    fn phase(s: Scenario) -> usize {
        match s {
            Scenario::Flat => 0,
            Scenario::CurlFront | Scenario::CurlBack => 1,
            Scenario::UnderCurl => 2,
        }
    }
    let mut cursor = 0usize;
    for step in 0..=steps {
        let amount = 1.5 * step as f64 / steps as f64;
        let scenario = fragment.evaluate(uv, amount).scenario;
        let pos = phase(scenario);
        if pos < cursor {
            return OracleVerdict::fail(
                NAME,
                format!("scenario {:?} regressed at amount {}", scenario, amount),
            );
        }
        cursor = pos;
    }
    OracleVerdict::pass(NAME, format!("ordered over {} steps", steps + 1))
}

/// Run the profile-independent vertex-path oracles against one evaluator.
///
/// Monotone lift and corner transport are circular-roll properties (the
/// elliptical roll legitimately dips late in the turn), so those are invoked
/// separately.
pub fn run_vertex_suite(curl: &VertexCurl, plane: &PagePlane, samples: &[Vec2]) -> Vec<OracleVerdict> {
    vec![
        check_identity_at_rest(curl, samples),
        check_leading_edge_order(curl, plane),
        check_far_corner_fixity(curl, plane),
    ]
}
