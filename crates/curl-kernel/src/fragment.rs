//! Per-fragment curl evaluation: the shader-equivalent UV remap.
//!
//! Instead of deforming geometry, this path answers "which texel of the flat
//! page is visible at this screen position" for every fragment of a
//! full-screen quad. The curl rolls along the fixed UV-space diagonal from
//! (1, 0) to (0, 1); each fragment is classified by its signed distance from
//! the advancing curl axis.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Tolerance;
use crate::curl::ProfileError;
use crate::geometry::Vec2;

/// Brightness floor of the front face as it bends away from the light.
const FRONT_AMBIENT: f64 = 0.7;
/// Angle-dependent part of the front-face brightness.
const FRONT_DIFFUSE: f64 = 0.3;
/// Flat darkening applied to back-face and under-curl samples.
const BACK_SHADE: f64 = 0.9;

/// A texture coordinate. The page occupies [0,1] x [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    pub fn in_bounds(&self) -> bool {
        self.u >= 0.0 && self.u <= 1.0 && self.v >= 0.0 && self.v <= 1.0
    }

    fn to_vec(self) -> Vec2 {
        Vec2::new(self.u, self.v)
    }

    fn from_vec(p: Vec2) -> Self {
        Self { u: p.x, v: p.y }
    }
}

/// Spatial classification of a fragment relative to the curl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// Ahead of the curl; the page lies flat here.
    Flat,
    /// On the curl cylinder, front face toward the viewer.
    CurlFront,
    /// On the curl cylinder, curled-under back face toward the viewer.
    CurlBack,
    /// Fully wrapped region behind the curl axis.
    UnderCurl,
}

/// Result of remapping one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragmentSample {
    /// Texture coordinate to sample the front-page image at.
    pub uv: Uv,
    pub scenario: Scenario,
    /// `false` means the fragment contributes no color at all (discard).
    pub visible: bool,
    /// RGB multiplier approximating curvature shading; 1.0 = unshaded.
    pub shade: f64,
}

impl FragmentSample {
    fn visible(uv: Uv, scenario: Scenario, shade: f64) -> Self {
        Self {
            uv,
            scenario,
            visible: true,
            shade,
        }
    }

    fn discarded(uv: Uv, scenario: Scenario) -> Self {
        Self {
            uv,
            scenario,
            visible: false,
            shade: 1.0,
        }
    }
}

/// Per-fragment curl evaluator with a fixed diagonal roll axis.
///
/// Pure and stateless: the same `(uv, amount)` pair always produces the same
/// sample, and inputs must be pristine texture coordinates, never the output
/// of a previous remap.
#[derive(Debug, Clone, Copy)]
pub struct FragmentCurl {
    radius: f64,
    tol: Tolerance,
}

impl FragmentCurl {
    #[instrument]
    pub fn new(radius: f64) -> Result<Self, ProfileError> {
        Self::with_tolerance(radius, Tolerance::default())
    }

    pub fn with_tolerance(radius: f64, tol: Tolerance) -> Result<Self, ProfileError> {
        if radius <= 0.0 {
            return Err(ProfileError::NonPositiveRadius { radius });
        }
        Ok(Self { radius, tol })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Remap one fragment's texture coordinate for the given curl amount.
    pub fn evaluate(&self, uv: Uv, amount: f64) -> FragmentSample {
        // A page never samples outside its own texture.
        if !uv.in_bounds() {
            return FragmentSample::discarded(uv, Scenario::Flat);
        }

        // Near-zero amounts short-circuit; the axis reference direction is
        // not defined at amount = 0.
        if self.tol.is_flat_amount(amount) {
            return FragmentSample::visible(uv, Scenario::Flat, 1.0);
        }

        let origin = Vec2::new(1.0, 0.0);
        let target = Vec2::new(0.0, 1.0);
        let span = target - origin;
        let hypotenuse = span.length();
        let dir = span / hypotenuse;
        let axis_pos = amount * hypotenuse;

        let p = uv.to_vec();
        let proj = (p - origin).dot(&dir);
        let dist = proj - axis_pos;

        if dist > self.radius {
            // Ahead of the curl: untouched flat page.
            return FragmentSample::visible(uv, Scenario::Flat, 1.0);
        }

        if dist >= 0.0 {
            // On the curl cylinder. Unroll to the front-face candidate p1
            // and the back-face candidate p2; the back face wins whenever
            // its coordinate is a valid texel.
            let line_point = p - dir * dist;
            let theta = (dist / self.radius).clamp(-1.0, 1.0).asin();
            let p1 = Uv::from_vec(line_point + dir * (theta * self.radius));
            let p2 = Uv::from_vec(line_point + dir * ((PI - theta) * self.radius));

            if p2.in_bounds() {
                return FragmentSample::visible(p2, Scenario::CurlBack, BACK_SHADE);
            }
            if p1.in_bounds() {
                let shade = FRONT_AMBIENT + FRONT_DIFFUSE * theta.cos();
                return FragmentSample::visible(p1, Scenario::CurlFront, shade);
            }
            return FragmentSample::discarded(p1, Scenario::CurlFront);
        }

        // Behind the curl axis: the page here has wrapped all the way over.
        let line_point = p - dir * dist;
        let unrolled = Uv::from_vec(line_point + dir * (PI * self.radius + dist.abs()));
        if unrolled.in_bounds() {
            FragmentSample::visible(unrolled, Scenario::UnderCurl, BACK_SHADE)
        } else {
            // No back-face texel lands here; the sample passes the original
            // coordinate through and the renderer treats it as the
            // underlying-page reveal.
            FragmentSample::visible(uv, Scenario::UnderCurl, 1.0)
        }
    }
}
