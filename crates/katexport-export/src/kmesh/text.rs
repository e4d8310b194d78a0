//! `.kmesh` text encoder
//!
//! Line-oriented form of the same logical data as the binary container.
//! Existing consumers parse this format byte-for-byte, so its quirks are
//! kept: vector fields are rendered `%.6f` and left-padded with NUL bytes to
//! a 10-byte minimum width, which is why the output is bytes, not a String.

use std::io::Write;

use katexport_core::prelude::*;

use super::MeshDocument;

/// Minimum field width of a padded vector component, trailing separator
/// included
const FIELD_WIDTH: usize = 10;

/// Encode a mesh document into the text container
pub fn encode(doc: &MeshDocument) -> Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();

    write!(buf, "name: {}\n", doc.name)?;
    write!(buf, "vertex   count: {}\n", doc.vertex_count())?;
    write!(buf, "material count: {}\n\n", doc.material_count())?;

    for group in &doc.groups {
        write!(
            buf,
            "({} offset:{} count:{} colour:{:.6} {:.6} {:.6} {:.6})\n",
            group.name,
            group.offset,
            group.count,
            group.color.r,
            group.color.g,
            group.color.b,
            group.color.a,
        )?;
    }

    let o = &doc.orientation;
    write!(buf, "\nposition: {:.6} {:.6} {:.6}\n", o.location.x, o.location.y, o.location.z)?;
    write!(buf, "rotation: {:.6} {:.6} {:.6}\n", o.rotation.x, o.rotation.y, o.rotation.z)?;
    write!(buf, "scale:    {:.6} {:.6} {:.6}\n\n", o.scale.x, o.scale.y, o.scale.z)?;

    write!(buf, "vertex:\n")?;
    for v in &doc.stream.positions {
        write_padded_vec3(&mut buf, *v);
    }
    write!(buf, "\n")?;

    write!(buf, "uv:\n")?;
    for uv in &doc.stream.uvs {
        write!(buf, "{:.6} {:.6}\n", uv.x, uv.y)?;
    }
    write!(buf, "\n")?;

    write!(buf, "normal:\n")?;
    for v in &doc.stream.normals {
        write_padded_vec3(&mut buf, *v);
    }
    write!(buf, "\n")?;

    write!(buf, "binormal:\n")?;
    for v in &doc.stream.binormals {
        write_padded_vec3(&mut buf, *v);
    }
    write!(buf, "\n")?;

    write!(buf, "tangent:\n")?;
    for v in &doc.stream.tangents {
        write_padded_vec3(&mut buf, *v);
    }
    write!(buf, "\n")?;

    Ok(buf)
}

/// One vector line: three `%.6f` fields, the first two space-terminated, the
/// last newline-terminated, each left-padded with NUL to [`FIELD_WIDTH`]
fn write_padded_vec3(buf: &mut Vec<u8>, v: Vec3) {
    push_padded(buf, &format!("{:.6} ", v.x));
    push_padded(buf, &format!("{:.6} ", v.y));
    push_padded(buf, &format!("{:.6}\n", v.z));
}

fn push_padded(buf: &mut Vec<u8>, field: &str) {
    if field.len() < FIELD_WIDTH {
        buf.resize(buf.len() + FIELD_WIDTH - field.len(), 0);
    }
    buf.extend_from_slice(field.as_bytes());
}
