//! Material grouping: partition faces into contiguous per-material runs
//!
//! The container stores each material's vertices as one contiguous run, so
//! the face list is stably partitioned by material before flattening.
//! Materials keep their first-seen order and faces keep their original
//! traversal order within each group.

use std::collections::HashMap;

use katexport_core::prelude::*;

use crate::scene::TriMesh;

/// A contiguous run of flattened vertices belonging to one material
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialGroup {
    /// Material name (grouping key)
    pub name: String,
    /// Index into the flattened vertex arrays where this run begins
    pub offset: u32,
    /// Number of flattened vertices in the run
    pub count: u32,
    /// Diffuse color of the first-seen slot carrying this name
    pub color: Rgba,
}

/// Result of the grouping pass
#[derive(Debug, Clone)]
pub struct Grouping {
    /// Per-material runs, in first-seen order
    pub groups: Vec<MaterialGroup>,
    /// Face indices reordered so each group's faces are contiguous
    pub face_order: Vec<usize>,
}

impl Grouping {
    /// Total flattened vertex count across all groups
    pub fn vertex_count(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }
}

/// Partition a mesh's faces by material
///
/// Single stable pass: faces are bucketed by resolved material *name* (two
/// slots carrying the same-named material coalesce into one group), buckets
/// ordered by first appearance in the face list. Fails with
/// [`Error::UnresolvedMaterial`] if any face references an empty or
/// out-of-range slot.
pub fn group_by_material(mesh: &TriMesh) -> Result<Grouping> {
    let mut bucket_of: HashMap<&str, usize> = HashMap::new();
    let mut names: Vec<&str> = Vec::new();
    let mut colors: Vec<Rgba> = Vec::new();
    let mut buckets: Vec<Vec<usize>> = Vec::new();

    for (face_index, face) in mesh.faces.iter().enumerate() {
        let material = mesh.material(face.material_index)?;
        let bucket = match bucket_of.get(material.name.as_str()) {
            Some(&b) => b,
            None => {
                let b = buckets.len();
                bucket_of.insert(&material.name, b);
                names.push(&material.name);
                colors.push(material.color);
                buckets.push(Vec::new());
                b
            }
        };
        buckets[bucket].push(face_index);
    }

    let mut groups = Vec::with_capacity(buckets.len());
    let mut face_order = Vec::with_capacity(mesh.faces.len());
    let mut offset = 0u32;

    for (bucket, faces) in buckets.into_iter().enumerate() {
        let count = (faces.len() * 3) as u32;
        groups.push(MaterialGroup {
            name: names[bucket].to_string(),
            offset,
            count,
            color: colors[bucket],
        });
        offset += count;
        face_order.extend(faces);
    }

    Ok(Grouping { groups, face_order })
}
