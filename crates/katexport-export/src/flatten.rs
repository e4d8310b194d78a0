//! Attribute flattening: expand grouped faces into parallel per-corner arrays

use katexport_core::prelude::*;

use crate::convert::map_vector;
use crate::scene::TriMesh;

/// Flattened per-corner attribute arrays, one entry per triangle corner
///
/// All arrays run in the grouped face order and are already converted to the
/// target coordinate frame, except UVs, which pass through unmapped.
#[derive(Debug, Clone, Default)]
pub struct VertexStream {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub binormals: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
}

impl VertexStream {
    /// Number of flattened vertices
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Expand the mesh into parallel attribute arrays following `face_order`
///
/// Per corner: position from the shared vertex; normal from the shared
/// vertex when the owning face is smooth-shaded, the flat face normal
/// otherwise; tangent/binormal/UV from the per-loop data at
/// `face_index * 3 + corner`. Requires a validated mesh (indices in range,
/// loop arrays sized `3 * faces`).
pub fn flatten(mesh: &TriMesh, face_order: &[usize]) -> Result<VertexStream> {
    let uvs = mesh.loop_uvs.as_ref().ok_or(Error::MissingUvChannel)?;

    let corners = face_order.len() * 3;
    let mut stream = VertexStream {
        positions: Vec::with_capacity(corners),
        normals: Vec::with_capacity(corners),
        binormals: Vec::with_capacity(corners),
        tangents: Vec::with_capacity(corners),
        uvs: Vec::with_capacity(corners),
    };

    for &face_index in face_order {
        let face = &mesh.faces[face_index];

        for corner in 0..3 {
            let vertex = face.indices[corner] as usize;
            let loop_index = face_index * 3 + corner;

            stream.positions.push(map_vector(mesh.positions[vertex]));

            let normal = if face.smooth {
                mesh.normals[vertex]
            } else {
                face.normal
            };
            stream.normals.push(map_vector(normal));

            stream.binormals.push(map_vector(mesh.loop_binormals[loop_index]));
            stream.tangents.push(map_vector(mesh.loop_tangents[loop_index]));
            stream.uvs.push(uvs[loop_index]);
        }
    }

    Ok(stream)
}
