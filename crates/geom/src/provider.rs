//! The seam between the kernel and the host modeling API.
//!
//! The kernel never talks to the host directly; it sees only raw coordinate
//! triples and coefficient quadruples through [`GeometryProvider`]. The
//! concrete provider lives in the wrapper layer.

use thiserror::Error;
use tracing::debug;

use crate::geometry::bbox::BoundingBox;
use crate::geometry::plane::Plane3d;
use crate::geometry::point::Point3d;
use crate::geometry::vector::Vec3;
use crate::EPSILON;

/// Structured failure information for host-API lookups.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("host modeling API call failed with code {code}")]
    HostApi { code: i32 },

    #[error("host returned degenerate geometry: {reason}")]
    DegenerateGeometry { reason: &'static str },
}

/// Raw geometry lookups against the host model.
///
/// Handles are opaque to the kernel; the provider owns their meaning.
pub trait GeometryProvider {
    type FaceHandle;
    type EdgeHandle;
    type EntityHandle;

    /// Implicit-plane coefficients `[a, b, c, d]` of a face.
    fn face_plane(&self, face: &Self::FaceHandle) -> Result<[f64; 4], ProviderError>;

    /// Displacement `[x, y, z]` from an edge's start vertex to its end vertex.
    fn edge_vector(&self, edge: &Self::EdgeHandle) -> Result<[f64; 3], ProviderError>;

    /// `[min, max]` corner triples of an entity's axis-aligned bounds.
    fn entity_bounds(&self, entity: &Self::EntityHandle) -> Result<[[f64; 3]; 2], ProviderError>;
}

impl Plane3d {
    /// Import a face's plane from the host.
    ///
    /// A face whose normal coefficients are all (near-)zero carries no
    /// plane and is rejected at this boundary.
    pub fn from_face<P: GeometryProvider>(
        provider: &P,
        face: &P::FaceHandle,
    ) -> Result<Self, ProviderError> {
        let [a, b, c, d] = provider.face_plane(face)?;
        if a.abs() < EPSILON && b.abs() < EPSILON && c.abs() < EPSILON {
            return Err(ProviderError::DegenerateGeometry {
                reason: "face plane has a zero normal",
            });
        }
        debug!(a, b, c, d, "imported face plane");
        Ok(Self::new(a, b, c, d))
    }
}

impl Vec3 {
    /// Import an edge's start-to-end displacement from the host.
    pub fn from_edge<P: GeometryProvider>(
        provider: &P,
        edge: &P::EdgeHandle,
    ) -> Result<Self, ProviderError> {
        Ok(Self::from_array(provider.edge_vector(edge)?))
    }
}

impl BoundingBox {
    /// Import an entity's axis-aligned bounds from the host.
    pub fn from_entity<P: GeometryProvider>(
        provider: &P,
        entity: &P::EntityHandle,
    ) -> Result<Self, ProviderError> {
        let [min, max] = provider.entity_bounds(entity)?;
        Ok(Self::new(Point3d::from_array(min), Point3d::from_array(max)))
    }
}
