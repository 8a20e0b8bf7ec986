use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Vec2;

/// Structured failure information for plane and roll-path construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Page dimensions must be positive, got {width} x {height}")]
    NonPositiveDimension { width: f64, height: f64 },
}

/// The flat rectangular page being curled, centered at the origin in local
/// coordinates with corners at (±width/2, ±height/2). Immutable for the
/// lifetime of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagePlane {
    width: f64,
    height: f64,
}

impl PagePlane {
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::NonPositiveDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// The corner the curl starts from.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.half_width(), -self.half_height())
    }

    /// The corner the curl rolls toward.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(-self.half_width(), self.half_height())
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(-self.half_width(), -self.half_height())
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.half_width(), self.half_height())
    }

    /// Length of the bottom-right -> top-left diagonal.
    pub fn hypotenuse(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_width() && p.y.abs() <= self.half_height()
    }
}

/// Coordinates of a point decomposed against a roll path: `along` is the
/// signed distance from the path origin toward the target corner, `across`
/// the signed perpendicular offset (positive on the counter-clockwise side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCoords {
    pub along: f64,
    pub across: f64,
}

/// The segment the peel front travels along, from the curl origin corner
/// toward the opposite corner. The peel front itself is the line through
/// `origin + dir * (amount * length)` perpendicular to `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollPath {
    origin: Vec2,
    dir: Vec2,
    length: f64,
}

impl RollPath {
    /// The classic diagonal path: bottom-right corner to top-left corner.
    ///
    /// Returns `None` for a degenerate (near zero-area) plane; callers treat
    /// that as the identity mapping rather than an error.
    pub fn diagonal(plane: &PagePlane, tol: f64) -> Option<Self> {
        Self::between(plane.bottom_right(), plane.top_left(), tol)
    }

    /// Path from the bottom-right corner along an arbitrary axis angle,
    /// measured so that `angle = atan2(height, width)` reproduces the
    /// diagonal direction. The path length stays the plane hypotenuse.
    pub fn at_angle(plane: &PagePlane, angle: f64, tol: f64) -> Option<Self> {
        let length = plane.hypotenuse();
        if length < tol {
            return None;
        }
        Some(Self {
            origin: plane.bottom_right(),
            dir: Vec2::new(-angle.cos(), angle.sin()),
            length,
        })
    }

    pub fn between(origin: Vec2, target: Vec2, tol: f64) -> Option<Self> {
        let span = target - origin;
        let length = span.length();
        if length < tol {
            return None;
        }
        Some(Self {
            origin,
            dir: span / length,
            length,
        })
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Position of the peel front along the path for a given curl amount.
    pub fn front_at(&self, amount: f64) -> f64 {
        amount * self.length
    }

    /// Decompose a point into along/across path coordinates.
    pub fn project(&self, p: Vec2) -> PathCoords {
        let rel = p - self.origin;
        PathCoords {
            along: rel.dot(&self.dir),
            across: rel.dot(&self.dir.perp()),
        }
    }

    /// Map along/across path coordinates back to plane space.
    pub fn to_world(&self, coords: PathCoords) -> Vec2 {
        self.origin + self.dir * coords.along + self.dir.perp() * coords.across
    }
}
