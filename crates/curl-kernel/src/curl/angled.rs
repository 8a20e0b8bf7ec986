//! Fixed-radius curl about an arbitrary roll axis.
//!
//! Unlike the corner-to-corner rolls, this variant models a localized curl:
//! the influence window grows with the amount, the curl strength falls off
//! perpendicular to the roll line, and the page can optionally drift as a
//! whole while it peels. Once a point has wrapped half a revolution it
//! leaves the cylinder and continues along the tangent.

use std::f64::consts::PI;

use crate::curl::Drift;
use crate::geometry::{Point3, Vec2};
use crate::plane::{PagePlane, PathCoords, RollPath};

/// Fraction of the plane diagonal the influence window covers at full amount.
const INFLUENCE_SPAN: f64 = 0.75;

pub(crate) fn evaluate(
    plane: &PagePlane,
    path: &RollPath,
    p: Vec2,
    amount: f64,
    radius: f64,
    drift: Drift,
) -> Point3 {
    let limit = amount * path.length() * INFLUENCE_SPAN;
    let coords = path.project(p);

    // Outside the influence window the point is exactly the identity; the
    // drift does not apply either, so far corners stay pinned.
    if coords.along < 0.0 || coords.along >= limit {
        return Point3::from_plane(p);
    }

    let falloff = (1.0 - coords.across.abs() / plane.half_width()).max(0.0);
    if falloff <= 0.0 {
        return Point3::from_plane(p);
    }

    // The falloff shrinks the effective cylinder, so the curl is tightest on
    // the roll line and dies out toward the edge of its band of influence.
    let r_eff = radius * falloff;
    let arc = limit - coords.along;
    let wrap = PI * r_eff;
    let (along_curl, lift) = if arc <= wrap {
        let theta = arc / r_eff;
        (limit - r_eff * theta.sin(), r_eff * (1.0 - theta.cos()))
    } else {
        // Fully wrapped half a revolution: the page lies flat on top of the
        // cylinder and extends straight out along the tangent.
        let extra = arc - wrap;
        (limit + extra, 2.0 * r_eff)
    };

    // Attenuating the displacement as well keeps the mapping continuous
    // where the band meets the untouched region.
    let along = coords.along + (along_curl - coords.along) * falloff;
    let lift = lift * falloff;

    let world = path.to_world(PathCoords {
        along,
        across: coords.across,
    });
    let world = match drift {
        Drift::None => world,
        Drift::Linear { velocity } => world + velocity * amount,
    };
    Point3::new(world.x, world.y, lift)
}
