//! Kat Mesh (`.kmesh`) document model and encoders
//!
//! One [`MeshDocument`] is built per export and fed to either the binary or
//! the text encoder; both describe the same logical data.

pub mod binary;
pub mod text;

use katexport_core::prelude::*;
use tracing::debug;

use crate::flatten::{flatten, VertexStream};
use crate::group::{group_by_material, MaterialGroup};
use crate::layout::Layout;
use crate::scene::MeshObject;
use crate::convert::{map_rotation, map_scale, map_vector};

/// Object orientation already converted to the target frame
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub location: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Everything the `.kmesh` encoders need, grouped, flattened and laid out
#[derive(Debug, Clone)]
pub struct MeshDocument {
    /// Export name: first component of the object name before any `'.'`
    pub name: String,
    pub orientation: Orientation,
    /// Per-material runs in discovery order
    pub groups: Vec<MaterialGroup>,
    /// Flattened per-corner attributes in grouped order
    pub stream: VertexStream,
    /// Binary section table; computed before any encoder runs
    pub layout: Layout,
}

impl MeshDocument {
    /// Run the whole pipeline: validate, group, flatten, convert, lay out
    pub fn build(object: &MeshObject) -> Result<Self> {
        object.mesh.validate()?;

        let grouping = group_by_material(&object.mesh)?;
        let stream = flatten(&object.mesh, &grouping.face_order)?;

        let orientation = Orientation {
            location: map_vector(object.transform.location),
            rotation: map_rotation(object.transform.rotation),
            scale: map_scale(object.transform.scale),
        };

        let layout = Layout::compute(stream.len() as u32, grouping.groups.len() as u32);
        debug!(
            vertices = stream.len(),
            materials = grouping.groups.len(),
            total_size = layout.total_size,
            "Computed .kmesh layout"
        );

        Ok(Self {
            name: export_name(&object.name),
            orientation,
            groups: grouping.groups,
            stream,
            layout,
        })
    }

    /// Flattened vertex count (three per triangle)
    pub fn vertex_count(&self) -> u32 {
        self.stream.len() as u32
    }

    /// Number of material table entries
    pub fn material_count(&self) -> u32 {
        self.groups.len() as u32
    }
}

/// First name component: hosts suffix duplicated objects as `Name.001`
fn export_name(name: &str) -> String {
    name.split('.').next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_name_strips_suffix() {
        assert_eq!(export_name("Cube.001"), "Cube");
        assert_eq!(export_name("Cube"), "Cube");
        assert_eq!(export_name(""), "");
    }
}
