//! Immutable scene snapshot handed over by the host application
//!
//! The exporter never touches the host's document model: the host performs
//! its own selection/join/triangulation and hands the pipeline a flattened
//! triangle list plus a material slot table. Everything here is transient
//! and rebuilt on every export invocation.

use katexport_core::prelude::*;
use serde::{Deserialize, Serialize};

/// A material as assigned in the host's slot table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Material name (keys the grouping; clamped to 32 bytes on disk)
    pub name: String,
    /// Diffuse color
    pub color: Rgba,
}

impl Material {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self { name: name.into(), color }
    }
}

/// A triangle face
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    /// Vertex indices (always triangles)
    pub indices: [u32; 3],
    /// Material slot index
    pub material_index: u32,
    /// Smoothing flag: shared vertex normals vs. flat face normal
    pub smooth: bool,
    /// Precomputed flat face normal
    pub normal: Vec3,
}

impl Face {
    /// Create a flat-shaded face with a zero normal
    pub fn new(i0: u32, i1: u32, i2: u32) -> Self {
        Self {
            indices: [i0, i1, i2],
            material_index: 0,
            smooth: false,
            normal: Vec3::ZERO,
        }
    }

    /// Compute the face normal from vertex positions
    pub fn calculate_normal(&self, positions: &[Vec3]) -> Vec3 {
        let v0 = positions[self.indices[0] as usize];
        let v1 = positions[self.indices[1] as usize];
        let v2 = positions[self.indices[2] as usize];

        let e1 = v1.sub(&v0);
        let e2 = v2.sub(&v0);
        e1.cross(&e2).normalize()
    }
}

/// An already-triangulated mesh snapshot
///
/// Positions and normals are per shared vertex; tangents, binormals and UVs
/// are per triangle corner ("loop"), stored in face order: loop index
/// `face_index * 3 + corner`. Corner attributes are never deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriMesh {
    /// Per-vertex positions
    pub positions: Vec<Vec3>,
    /// Per-vertex (shared) normals
    pub normals: Vec<Vec3>,
    /// Triangle faces
    pub faces: Vec<Face>,
    /// Per-corner tangents, `3 * faces.len()` entries
    pub loop_tangents: Vec<Vec3>,
    /// Per-corner binormals (bitangents), `3 * faces.len()` entries
    pub loop_binormals: Vec<Vec3>,
    /// Per-corner UVs from the active UV layer, if any
    pub loop_uvs: Option<Vec<Vec2>>,
    /// Material slot table; a slot may be empty
    pub materials: Vec<Option<Material>>,
}

impl TriMesh {
    /// Number of flattened output vertices: three per triangle
    pub fn corner_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Resolve a face's material slot
    pub fn material(&self, slot: u32) -> Result<&Material> {
        self.materials
            .get(slot as usize)
            .and_then(|m| m.as_ref())
            .ok_or(Error::UnresolvedMaterial { slot })
    }

    /// Check the structural invariants the pipeline relies on
    ///
    /// Runs once, before any grouping or flattening, so the later passes can
    /// index without bounds anxiety.
    pub fn validate(&self) -> Result<()> {
        if self.normals.len() != self.positions.len() {
            return Err(Error::invalid_geometry(format!(
                "{} vertex normals for {} positions",
                self.normals.len(),
                self.positions.len()
            )));
        }

        let corners = self.corner_count();
        if self.loop_tangents.len() != corners {
            return Err(Error::invalid_geometry(format!(
                "{} loop tangents for {} corners",
                self.loop_tangents.len(),
                corners
            )));
        }
        if self.loop_binormals.len() != corners {
            return Err(Error::invalid_geometry(format!(
                "{} loop binormals for {} corners",
                self.loop_binormals.len(),
                corners
            )));
        }
        if let Some(uvs) = &self.loop_uvs {
            if uvs.len() != corners {
                return Err(Error::invalid_geometry(format!(
                    "{} loop UVs for {} corners",
                    uvs.len(),
                    corners
                )));
            }
        }

        for (i, face) in self.faces.iter().enumerate() {
            for &index in &face.indices {
                if index as usize >= self.positions.len() {
                    return Err(Error::invalid_geometry(format!(
                        "face {} references vertex {} of {}",
                        i,
                        index,
                        self.positions.len()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Recompute all flat face normals from vertex positions
    ///
    /// For hosts that do not precompute them. Requires valid indices.
    pub fn recompute_face_normals(&mut self) {
        let positions = std::mem::take(&mut self.positions);
        for face in &mut self.faces {
            face.normal = face.calculate_normal(&positions);
        }
        self.positions = positions;
    }
}

/// Object transform in the authoring tool's coordinate frame
///
/// Rotation is a Euler triple in radians, sign unconstrained; conversion to
/// the target convention happens on output only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectTransform {
    pub location: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// A selected mesh object: name, transform, triangulated geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshObject {
    pub name: String,
    pub transform: ObjectTransform,
    pub mesh: TriMesh,
}

/// One sampled point on an animation channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChannelSample {
    /// Frame number the sample sits on
    pub frame: f32,
    /// Sampled channel value
    pub value: f32,
}

/// A single per-component animation channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Host-side target label (e.g. "location", "rotation_euler", "scale")
    pub label: String,
    /// Samples, ordered by frame
    pub samples: Vec<ChannelSample>,
}

impl Channel {
    pub fn new(label: impl Into<String>, samples: Vec<ChannelSample>) -> Self {
        Self { label: label.into(), samples }
    }
}

/// Sampled transform animation for one object
///
/// Channel-to-semantic mapping is positional and fixed: channels 0-2 are
/// position X/Y/Z, 3-5 rotation, 6-8 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Scene frame rate
    pub fps: u32,
    /// Per-component channels, at least nine
    pub channels: Vec<Channel>,
}
