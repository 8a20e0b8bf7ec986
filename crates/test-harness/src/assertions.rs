//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual values and the context string
//! the caller supplies, for maximum debuggability.

use curl_kernel::{FragmentSample, Point3, Scenario};

use crate::helpers::HarnessError;

/// Assert two deformed positions coincide within `tol` on every component.
pub fn assert_point_close(
    actual: &Point3,
    expected: &Point3,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let dx = (actual.x - expected.x).abs();
    let dy = (actual.y - expected.y).abs();
    let dz = (actual.z - expected.z).abs();
    if dx <= tol && dy <= tol && dz <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected ({}, {}, {}), got ({}, {}, {}), tol {}",
                ctx, expected.x, expected.y, expected.z, actual.x, actual.y, actual.z, tol,
            ),
        })
    }
}

/// Assert a point is the exact identity of its input with zero lift.
pub fn assert_identity(actual: &Point3, x: f64, y: f64, ctx: &str) -> Result<(), HarnessError> {
    if actual.x == x && actual.y == y && actual.z == 0.0 {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected exact identity of ({}, {}), got ({}, {}, {})",
                ctx, x, y, actual.x, actual.y, actual.z,
            ),
        })
    }
}

/// Assert a fragment sample resolved to the expected scenario and
/// visibility.
pub fn assert_scenario(
    sample: &FragmentSample,
    scenario: Scenario,
    visible: bool,
    ctx: &str,
) -> Result<(), HarnessError> {
    if sample.scenario == scenario && sample.visible == visible {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {:?} (visible: {}), got {:?} (visible: {})",
                ctx, scenario, visible, sample.scenario, sample.visible,
            ),
        })
    }
}
