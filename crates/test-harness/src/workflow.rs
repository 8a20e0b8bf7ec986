//! TransitionScript — fluent API for driving transitions in tests.
//!
//! Drives the real `curl-driver` stepping path, not a simulation: the script
//! owns a `TransitionState` and a `PageMesh`, advances them in fixed discrete
//! steps, and records a snapshot per frame for later inspection.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use curl_driver::{PageMesh, StepStatus, TransitionConfig, TransitionState};
use curl_kernel::{PagePlane, Point3, VertexCurl};

use crate::helpers::HarnessError;

/// One recorded frame of a scripted run.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub frame: usize,
    pub amount: f64,
    /// Deformed position of the curl origin corner (the last mesh vertex).
    pub origin_corner: Point3,
    /// Highest lift over the whole mesh this frame.
    pub max_lift: f64,
}

/// A fluent builder for scripting a page-curl transition in tests.
pub struct TransitionScript {
    plane: PagePlane,
    config: TransitionConfig,
    segments: usize,
    step: Duration,
}

impl TransitionScript {
    pub fn new(plane: PagePlane) -> Self {
        Self {
            plane,
            config: TransitionConfig::default(),
            segments: 32,
            step: Duration::from_millis(16),
        }
    }

    pub fn with_config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Size of each discrete step (default 16 ms, one 60 Hz frame).
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Run the transition to completion, recording every frame.
    pub fn run(self) -> Result<ScriptedRun, HarnessError> {
        let curl = VertexCurl::new(self.plane, self.config.profile)
            .map_err(|e| HarnessError::Config(e.to_string()))?;
        let mut state = TransitionState::new(self.config)
            .map_err(|e| HarnessError::Config(e.to_string()))?;
        let mut mesh = PageMesh::new(self.plane, self.segments, self.segments)
            .map_err(|e| HarnessError::Config(e.to_string()))?;

        let mut frames = Vec::new();
        let mut frame = 0usize;
        loop {
            let status = state.advance(self.step);
            mesh.deform(&curl, state.amount());

            let origin_corner = *mesh
                .positions()
                .last()
                .expect("mesh has at least four vertices");
            let max_lift = mesh
                .positions()
                .iter()
                .map(|p| p.z)
                .fold(0.0f64, f64::max);
            frames.push(FrameSnapshot {
                frame,
                amount: state.amount(),
                origin_corner,
                max_lift,
            });
            frame += 1;

            if status == StepStatus::Done {
                break;
            }
        }
        debug!(frames = frames.len(), "scripted transition complete");
        Ok(ScriptedRun { frames })
    }
}

/// The recorded result of a completed scripted transition.
pub struct ScriptedRun {
    frames: Vec<FrameSnapshot>,
}

impl ScriptedRun {
    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn first(&self) -> &FrameSnapshot {
        self.frames.first().expect("a run records at least one frame")
    }

    pub fn last(&self) -> &FrameSnapshot {
        self.frames.last().expect("a run records at least one frame")
    }

    /// Final curl amount; equals the configured target for a completed run.
    pub fn final_amount(&self) -> f64 {
        self.last().amount
    }

    /// Serialize the recorded frames for diagnostic dumps.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        serde_json::to_string_pretty(&self.frames)
            .map_err(|e| HarnessError::Config(e.to_string()))
    }
}
