use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use curl_kernel::{PagePlane, Point3, Vec2, VertexCurl};

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("Mesh must have at least one segment per side, got {segments_x} x {segments_y}")]
    NoSegments {
        segments_x: usize,
        segments_y: usize,
    },
}

/// A segmented vertex grid over the page plane.
///
/// The grid keeps two buffers: the immutable rest positions laid out at
/// construction, and the deformed positions recomputed by [`PageMesh::deform`].
/// Deformation always reads the rest buffer, so feeding a vertex its own
/// previous output — the classic way curl math goes wrong — is impossible by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMesh {
    plane: PagePlane,
    segments_x: usize,
    segments_y: usize,
    rest: Vec<Vec2>,
    deformed: Vec<Point3>,
}

impl PageMesh {
    pub fn new(plane: PagePlane, segments_x: usize, segments_y: usize) -> Result<Self, MeshError> {
        if segments_x == 0 || segments_y == 0 {
            return Err(MeshError::NoSegments {
                segments_x,
                segments_y,
            });
        }

        let cols = segments_x + 1;
        let rows = segments_y + 1;
        let mut rest = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            // Rows run top to bottom, columns left to right.
            let fy = 0.5 - row as f64 / segments_y as f64;
            for col in 0..cols {
                let fx = col as f64 / segments_x as f64 - 0.5;
                rest.push(Vec2::new(fx * plane.width(), fy * plane.height()));
            }
        }

        let deformed = rest.iter().map(|p| Point3::from_plane(*p)).collect();
        debug!(vertices = rest.len(), "page mesh built");
        Ok(Self {
            plane,
            segments_x,
            segments_y,
            rest,
            deformed,
        })
    }

    pub fn plane(&self) -> &PagePlane {
        &self.plane
    }

    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    pub fn columns(&self) -> usize {
        self.segments_x + 1
    }

    pub fn rows(&self) -> usize {
        self.segments_y + 1
    }

    /// Pristine rest positions, row-major from the top-left vertex.
    pub fn rest_positions(&self) -> &[Vec2] {
        &self.rest
    }

    /// Deformed positions from the most recent [`PageMesh::deform`] call.
    pub fn positions(&self) -> &[Point3] {
        &self.deformed
    }

    /// Recompute every deformed vertex from its rest position at the given
    /// curl amount.
    pub fn deform(&mut self, curl: &VertexCurl, amount: f64) {
        for (rest, out) in self.rest.iter().zip(self.deformed.iter_mut()) {
            *out = curl.evaluate(rest.x, rest.y, amount);
        }
    }

    /// Reset the deformed buffer back to the flat rest state.
    pub fn reset(&mut self) {
        for (rest, out) in self.rest.iter().zip(self.deformed.iter_mut()) {
            *out = Point3::from_plane(*rest);
        }
    }
}
