//! Integration tests driving a full transition the way a render loop would:
//! advance the clock, deform the mesh from rest positions, upload uniforms.

use std::time::Duration;

use curl_driver::{PageMesh, StepStatus, TransitionConfig, TransitionState};
use curl_kernel::{CurlProfile, PagePlane, VertexCurl};

fn plane() -> PagePlane {
    PagePlane::new(4.0, 8.0).unwrap()
}

#[test]
fn full_frame_loop_runs_to_completion() {
    let plane = plane();
    let curl = VertexCurl::new(plane, CurlProfile::Cylindrical).unwrap();
    let mut state = TransitionState::new(TransitionConfig {
        duration: Duration::from_millis(480),
        ..TransitionConfig::default()
    })
    .unwrap();
    let mut mesh = PageMesh::new(plane, 32, 32).unwrap();

    let mut frames = 0;
    loop {
        let status = state.advance(Duration::from_millis(16));
        mesh.deform(&curl, state.amount());
        let uniforms = state.frame_uniforms();
        assert_eq!(uniforms.amount, state.amount());
        frames += 1;
        if status == StepStatus::Done {
            break;
        }
        assert!(frames < 1000, "transition never completed");
    }

    assert_eq!(frames, 30);
    assert!(state.is_done());

    // The mesh's final frame has the origin corner rolled onto the target.
    let last = mesh.positions().last().unwrap();
    let tl = plane.top_left();
    assert!((last.x - tl.x).abs() < 1e-6);
    assert!((last.y - tl.y).abs() < 1e-6);
    assert!(last.z > 0.0);
}

#[test]
fn mid_transition_frame_matches_direct_evaluation() {
    let plane = plane();
    let curl = VertexCurl::new(plane, CurlProfile::elliptical(0.125)).unwrap();
    let mut state = TransitionState::new(TransitionConfig {
        duration: Duration::from_millis(1000),
        profile: CurlProfile::elliptical(0.125),
        ..TransitionConfig::default()
    })
    .unwrap();
    let mut mesh = PageMesh::new(plane, 8, 8).unwrap();

    state.advance(Duration::from_millis(400));
    mesh.deform(&curl, state.amount());

    for (rest, deformed) in mesh.rest_positions().iter().zip(mesh.positions()) {
        let direct = curl.evaluate(rest.x, rest.y, state.amount());
        assert_eq!(*deformed, direct);
    }
}

#[test]
fn stale_frames_do_not_accumulate_deformation() {
    // Stepping the mesh twice without advancing the clock must be a no-op,
    // because deformation always starts from the rest buffer.
    let plane = plane();
    let curl = VertexCurl::new(plane, CurlProfile::Cylindrical).unwrap();
    let mut state = TransitionState::new(TransitionConfig::default()).unwrap();
    let mut mesh = PageMesh::new(plane, 16, 16).unwrap();

    state.advance(Duration::from_millis(300));
    mesh.deform(&curl, state.amount());
    let snapshot: Vec<_> = mesh.positions().to_vec();
    mesh.deform(&curl, state.amount());
    mesh.deform(&curl, state.amount());
    assert_eq!(snapshot, mesh.positions());
}
