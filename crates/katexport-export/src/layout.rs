//! Binary container layout: section byte offsets from vertex/material counts
//!
//! The header declares where every section starts before any section is
//! written, so the entire table is a pure function of the two counts and is
//! computed up front. There is no seek-back or forward patching.

/// Length of the fixed name field at the start of the file
pub const NAME_FIELD_LEN: usize = 32;

/// Number of u32 header fields following the name
const HEADER_FIELD_COUNT: u32 = 10;

/// Bytes per material table entry: 32-byte name + offset + count + RGBA
const MATERIAL_ENTRY_SIZE: u32 = 32 + 4 + 4 + 16;

/// Bytes per 3-float attribute entry
const VEC3_SIZE: u32 = 12;

/// Bytes per UV entry
const VEC2_SIZE: u32 = 8;

/// Absolute byte offsets of every section of a `.kmesh` binary container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Orientation block: 9 floats (location, rotation, scale)
    pub orientation_offset: u32,
    /// Material table
    pub material_offset: u32,
    /// Flattened positions
    pub vertex_offset: u32,
    /// Flattened normals
    pub normal_offset: u32,
    /// Flattened binormals
    pub binormal_offset: u32,
    /// Flattened tangents
    pub tangent_offset: u32,
    /// Flattened UVs
    pub uv_offset: u32,
    /// Total file size in bytes
    pub total_size: u32,
}

impl Layout {
    /// Compute the full section table for `vertex_count` flattened vertices
    /// and `material_count` material table entries
    pub fn compute(vertex_count: u32, material_count: u32) -> Self {
        let orientation_offset = NAME_FIELD_LEN as u32 + HEADER_FIELD_COUNT * 4;
        let material_offset = orientation_offset + 9 * 4;
        let vertex_offset = material_offset + material_count * MATERIAL_ENTRY_SIZE;
        let normal_offset = vertex_offset + vertex_count * VEC3_SIZE;
        let binormal_offset = normal_offset + vertex_count * VEC3_SIZE;
        let tangent_offset = binormal_offset + vertex_count * VEC3_SIZE;
        let uv_offset = tangent_offset + vertex_count * VEC3_SIZE;
        let total_size = uv_offset + vertex_count * VEC2_SIZE;

        Self {
            orientation_offset,
            material_offset,
            vertex_offset,
            normal_offset,
            binormal_offset,
            tangent_offset,
            uv_offset,
            total_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_offsets() {
        let layout = Layout::compute(0, 0);
        assert_eq!(layout.orientation_offset, 72);
        assert_eq!(layout.material_offset, 108);
        assert_eq!(layout.vertex_offset, 108);
        assert_eq!(layout.total_size, 108);
    }

    #[test]
    fn test_one_triangle_one_material() {
        let layout = Layout::compute(3, 1);
        assert_eq!(layout.vertex_offset, 108 + 56);
        assert_eq!(layout.normal_offset, layout.vertex_offset + 36);
        assert_eq!(layout.binormal_offset, layout.normal_offset + 36);
        assert_eq!(layout.tangent_offset, layout.binormal_offset + 36);
        assert_eq!(layout.uv_offset, layout.tangent_offset + 36);
        assert_eq!(layout.total_size, layout.uv_offset + 24);
    }

    #[test]
    fn test_sections_monotonic() {
        let layout = Layout::compute(3000, 7);
        let offsets = [
            layout.orientation_offset,
            layout.material_offset,
            layout.vertex_offset,
            layout.normal_offset,
            layout.binormal_offset,
            layout.tangent_offset,
            layout.uv_offset,
            layout.total_size,
        ];
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }
}
