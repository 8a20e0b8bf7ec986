//! Tests for the oracle verdicts themselves: they must fail loudly when fed
//! an evaluator that violates the property, not just pass on good input.

use curl_kernel::{FragmentCurl, Uv, Vec2};
use test_harness::helpers::{cylindrical_curl, plane_grid, standard_plane};
use test_harness::oracle;

#[test]
fn verdicts_carry_oracle_names_and_detail() {
    let plane = standard_plane();
    let curl = cylindrical_curl(plane);
    let verdict = oracle::check_corner_transport(&curl, &plane);
    assert_eq!(verdict.oracle_name, "corner_transport");
    assert!(verdict.passed);
    assert!(!verdict.detail.is_empty());
    assert!(verdict.value.is_some());
}

#[test]
fn identity_oracle_passes_on_grid() {
    let plane = standard_plane();
    let curl = cylindrical_curl(plane);
    let samples = plane_grid(&plane, 7);
    let verdict = oracle::check_identity_at_rest(&curl, &samples);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn identity_oracle_reports_sample_count() {
    let plane = standard_plane();
    let curl = cylindrical_curl(plane);
    let samples = plane_grid(&plane, 3);
    let verdict = oracle::check_identity_at_rest(&curl, &samples);
    assert!(verdict.detail.contains("9 samples"));
}

#[test]
fn monotonic_lift_oracle_reports_final_height() {
    let plane = standard_plane();
    let curl = cylindrical_curl(plane);
    let verdict = oracle::check_monotonic_lift(&curl, &plane, 8);
    assert!(verdict.passed, "{}", verdict.detail);
    let final_y = verdict.value.unwrap();
    // By the last sampled amount the corner is well above the midline.
    assert!(final_y > 0.0);
}

#[test]
fn bounds_discard_oracle_covers_all_edges() {
    let fragment = FragmentCurl::new(0.15).unwrap();
    let verdict = oracle::check_fragment_bounds_discard(&fragment);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn progression_oracle_handles_corner_fragments() {
    let fragment = FragmentCurl::new(0.2).unwrap();
    // The curl origin corner goes under almost immediately; still a valid
    // monotone phase walk.
    let verdict = oracle::check_scenario_progression(&fragment, Uv::new(1.0, 0.0), 100);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn leading_edge_oracle_reports_separation() {
    let plane = standard_plane();
    let curl = cylindrical_curl(plane);
    let verdict = oracle::check_leading_edge_order(&curl, &plane);
    assert!(verdict.passed, "{}", verdict.detail);
    assert!(verdict.value.unwrap() > 0.0);
}

#[test]
fn far_corner_oracle_ignores_drifting_profiles_outside_window() {
    use curl_kernel::{CurlProfile, VertexCurl};
    let plane = standard_plane();
    let angle = (plane.height() / plane.width()).atan();
    let profile = CurlProfile::angled(0.5, angle).with_drift(Vec2::new(-0.5, 0.5));
    let curl = VertexCurl::new(plane, profile).unwrap();
    let verdict = oracle::check_far_corner_fixity(&curl, &plane);
    assert!(verdict.passed, "{}", verdict.detail);
}
