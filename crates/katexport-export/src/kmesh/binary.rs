//! `.kmesh` binary encoder
//!
//! Fixed little-endian layout: 32-byte name, ten u32 header fields, nine
//! orientation floats, the material table, then the five attribute arrays in
//! the order position, normal, binormal, tangent, UV. Packed floats, no
//! padding between entries. The header's declared total size equals the
//! encoded byte length.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use katexport_core::prelude::*;

use super::MeshDocument;
use crate::layout::NAME_FIELD_LEN;

/// Encode a mesh document into the binary container
pub fn encode(doc: &MeshDocument) -> Result<Vec<u8>> {
    let layout = &doc.layout;
    let mut buf: Vec<u8> = Vec::with_capacity(layout.total_size as usize);

    write_name_field(&mut buf, &doc.name)?;

    buf.write_u32::<LittleEndian>(layout.total_size)?;
    buf.write_u32::<LittleEndian>(doc.vertex_count())?;
    buf.write_u32::<LittleEndian>(doc.material_count())?;
    buf.write_u32::<LittleEndian>(layout.orientation_offset)?;
    buf.write_u32::<LittleEndian>(layout.vertex_offset)?;
    buf.write_u32::<LittleEndian>(layout.normal_offset)?;
    buf.write_u32::<LittleEndian>(layout.binormal_offset)?;
    buf.write_u32::<LittleEndian>(layout.tangent_offset)?;
    buf.write_u32::<LittleEndian>(layout.uv_offset)?;
    buf.write_u32::<LittleEndian>(layout.material_offset)?;

    write_vec3(&mut buf, doc.orientation.location)?;
    write_vec3(&mut buf, doc.orientation.rotation)?;
    write_vec3(&mut buf, doc.orientation.scale)?;

    for group in &doc.groups {
        write_name_field(&mut buf, &group.name)?;
        buf.write_u32::<LittleEndian>(group.offset)?;
        buf.write_u32::<LittleEndian>(group.count)?;
        for channel in group.color.to_array() {
            buf.write_f32::<LittleEndian>(channel)?;
        }
    }

    for &position in &doc.stream.positions {
        write_vec3(&mut buf, position)?;
    }
    for &normal in &doc.stream.normals {
        write_vec3(&mut buf, normal)?;
    }
    for &binormal in &doc.stream.binormals {
        write_vec3(&mut buf, binormal)?;
    }
    for &tangent in &doc.stream.tangents {
        write_vec3(&mut buf, tangent)?;
    }
    for uv in &doc.stream.uvs {
        buf.write_f32::<LittleEndian>(uv.x)?;
        buf.write_f32::<LittleEndian>(uv.y)?;
    }

    debug_assert_eq!(buf.len(), layout.total_size as usize);
    Ok(buf)
}

/// Write a fixed 32-byte name field, NUL-padded, truncated at 32 bytes
fn write_name_field(buf: &mut Vec<u8>, name: &str) -> Result<()> {
    let bytes = name.as_bytes();
    let len = bytes.len().min(NAME_FIELD_LEN);
    buf.write_all(&bytes[..len])?;
    buf.write_all(&vec![0u8; NAME_FIELD_LEN - len])?;
    Ok(())
}

fn write_vec3(buf: &mut Vec<u8>, v: Vec3) -> Result<()> {
    buf.write_f32::<LittleEndian>(v.x)?;
    buf.write_f32::<LittleEndian>(v.y)?;
    buf.write_f32::<LittleEndian>(v.z)?;
    Ok(())
}
