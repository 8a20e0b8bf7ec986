//! Transition driving for the page-curl kernel.
//!
//! The evaluators in `curl-kernel` are pure functions of a coordinate and a
//! curl amount; this crate owns everything that changes over a transition's
//! lifetime. [`TransitionState`] is advanced by a synchronous
//! [`TransitionState::advance`] call so any scheduler — a render loop, a
//! timer, or a test harness stepping discrete frames — can drive it without
//! committing to a concurrency primitive. [`PageMesh`] holds the pristine
//! rest positions of a vertex grid and recomputes the deformed buffer from
//! them on every frame, so deformation can never accumulate.

pub mod mesh;
pub mod state;

pub use mesh::{MeshError, PageMesh};
pub use state::{ConfigError, FrameUniforms, StepStatus, TransitionConfig, TransitionState};
