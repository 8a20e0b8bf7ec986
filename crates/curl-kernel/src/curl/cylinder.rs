//! Circular-cylinder roll: the page wraps around a cylinder whose
//! circumference equals the roll-path length, so one full turn carries the
//! origin corner exactly onto the target corner.

use std::f64::consts::TAU;

use crate::Tolerance;
use crate::geometry::{Point3, Vec2};
use crate::plane::{PathCoords, RollPath};

pub(crate) fn evaluate(path: &RollPath, p: Vec2, amount: f64, tol: &Tolerance) -> Point3 {
    let radius = path.length() / TAU;
    let coords = path.project(p);
    let front = path.front_at(amount);

    // Points ahead of the peel front are untouched. The small negative slack
    // on `along` absorbs floating-point rounding for the origin corner.
    if coords.along > front || coords.along < -tol.degenerate {
        return Point3::from_plane(p);
    }

    let arc = front - coords.along;
    let theta = if tol.is_degenerate_length(radius) {
        0.0
    } else {
        arc / radius
    };

    let along = front - radius * theta.sin();
    let lift = radius * (1.0 - theta.cos());
    // cos(θ) rounds to exactly 1.0 when θ lands on 2π, which would put the
    // seam at z = 0 and let it z-fight the incoming page. Keep any bent
    // point strictly lifted.
    let lift = if theta > 0.0 {
        lift.max(tol.seam_lift)
    } else {
        lift
    };

    let world = path.to_world(PathCoords {
        along,
        across: coords.across,
    });
    Point3::new(world.x, world.y, lift)
}
