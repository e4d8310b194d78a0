//! `.kanim` binary encoder
//!
//! Frame count and frames-per-second as little-endian u32, then per frame
//! the time followed by nine converted floats (position, rotation, scale).

use byteorder::{LittleEndian, WriteBytesExt};

use katexport_core::prelude::*;

use super::AnimDocument;

/// Encode an animation document into the binary container
pub fn encode(doc: &AnimDocument) -> Result<Vec<u8>> {
    // 8-byte header + 10 floats per frame
    let mut buf: Vec<u8> = Vec::with_capacity(8 + doc.frames.len() * 40);

    buf.write_u32::<LittleEndian>(doc.frame_count())?;
    buf.write_u32::<LittleEndian>(doc.fps)?;

    for frame in &doc.frames {
        buf.write_f32::<LittleEndian>(frame.time)?;
        write_vec3(&mut buf, frame.position)?;
        write_vec3(&mut buf, frame.rotation)?;
        write_vec3(&mut buf, frame.scale)?;
    }

    Ok(buf)
}

fn write_vec3(buf: &mut Vec<u8>, v: Vec3) -> Result<()> {
    buf.write_f32::<LittleEndian>(v.x)?;
    buf.write_f32::<LittleEndian>(v.y)?;
    buf.write_f32::<LittleEndian>(v.z)?;
    Ok(())
}
