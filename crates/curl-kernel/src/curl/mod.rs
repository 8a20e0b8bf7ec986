//! The vertex-path curl evaluator family.
//!
//! One configurable evaluator replaces the historical pile of near-identical
//! curl functions: the cross-section (circular or elliptical), the roll axis
//! (corner diagonal or arbitrary angle), and the translation drift are all
//! selected by a [`CurlProfile`] at construction time. Evaluation itself is a
//! pure function from a pristine plane coordinate and a curl amount to a
//! deformed 3D position.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::Tolerance;
use crate::geometry::{Point3, Vec2};
use crate::plane::{PagePlane, RollPath};

mod angled;
mod cylinder;
mod ellipse;

/// Structured failure information for evaluator configuration.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Curl radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },

    #[error("Ellipse radius ratio must be positive, got {ratio}")]
    NonPositiveRatio { ratio: f64 },
}

/// Translation drift applied to curled points as the page peels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Drift {
    None,
    /// World-space displacement `velocity * amount`.
    Linear { velocity: Vec2 },
}

/// Configuration of the curl cross-section, roll axis, and drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurlProfile {
    /// Circular cylinder rolling from the bottom-right corner to the
    /// top-left corner; the radius is derived from the diagonal so one full
    /// turn consumes the whole path.
    Cylindrical,
    /// Elliptical cylinder on the same roll path; `ratio` is the
    /// minor/major semi-axis ratio. The approximate circumference still
    /// matches the diagonal.
    Elliptical { ratio: f64 },
    /// Fixed-radius curl about an axis at an arbitrary angle through the
    /// bottom-right corner, with a finite band of influence perpendicular
    /// to the roll line and an optional translation drift.
    Angled { radius: f64, angle: f64, drift: Drift },
}

impl CurlProfile {
    pub fn elliptical(ratio: f64) -> Self {
        Self::Elliptical { ratio }
    }

    pub fn angled(radius: f64, angle: f64) -> Self {
        Self::Angled {
            radius,
            angle,
            drift: Drift::None,
        }
    }

    pub fn with_drift(self, velocity: Vec2) -> Self {
        match self {
            Self::Angled { radius, angle, .. } => Self::Angled {
                radius,
                angle,
                drift: Drift::Linear { velocity },
            },
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ProfileError> {
        match *self {
            Self::Cylindrical => Ok(()),
            Self::Elliptical { ratio } => {
                if ratio <= 0.0 {
                    Err(ProfileError::NonPositiveRatio { ratio })
                } else {
                    Ok(())
                }
            }
            Self::Angled { radius, .. } => {
                if radius <= 0.0 {
                    Err(ProfileError::NonPositiveRadius { radius })
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Per-vertex curl evaluator. Stateless between calls: every evaluation must
/// be fed the original undeformed coordinate, never a previously deformed
/// one — deformation is not cumulative.
#[derive(Debug, Clone, Copy)]
pub struct VertexCurl {
    plane: PagePlane,
    profile: CurlProfile,
    /// `None` when the plane diagonal is degenerate; evaluation is then the
    /// identity mapping.
    path: Option<RollPath>,
    tol: Tolerance,
}

impl VertexCurl {
    #[instrument]
    pub fn new(plane: PagePlane, profile: CurlProfile) -> Result<Self, ProfileError> {
        Self::with_tolerance(plane, profile, Tolerance::default())
    }

    pub fn with_tolerance(
        plane: PagePlane,
        profile: CurlProfile,
        tol: Tolerance,
    ) -> Result<Self, ProfileError> {
        profile.validate()?;
        let path = match profile {
            CurlProfile::Angled { angle, .. } => RollPath::at_angle(&plane, angle, tol.degenerate),
            _ => RollPath::diagonal(&plane, tol.degenerate),
        };
        if path.is_none() {
            debug!(?plane, "degenerate roll path, evaluator is the identity");
        }
        Ok(Self {
            plane,
            profile,
            path,
            tol,
        })
    }

    pub fn plane(&self) -> &PagePlane {
        &self.plane
    }

    pub fn profile(&self) -> &CurlProfile {
        &self.profile
    }

    /// Map a pristine plane coordinate to its deformed position at the given
    /// curl amount (0 = flat, 1 = rolled to the opposite corner).
    pub fn evaluate(&self, x: f64, y: f64, amount: f64) -> Point3 {
        let p = Vec2::new(x, y);
        let Some(path) = &self.path else {
            return Point3::from_plane(p);
        };
        match self.profile {
            CurlProfile::Cylindrical => cylinder::evaluate(path, p, amount, &self.tol),
            CurlProfile::Elliptical { ratio } => {
                ellipse::evaluate(path, p, amount, ratio, &self.tol)
            }
            CurlProfile::Angled { radius, drift, .. } => {
                angled::evaluate(&self.plane, path, p, amount, radius, drift)
            }
        }
    }

    /// Evaluate a whole slice of pristine coordinates.
    pub fn evaluate_all(&self, points: &[Vec2], amount: f64, out: &mut Vec<Point3>) {
        out.clear();
        out.extend(points.iter().map(|p| self.evaluate(p.x, p.y, amount)));
    }
}
