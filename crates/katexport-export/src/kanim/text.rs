//! `.kanim` text encoder
//!
//! Labeled lines per frame; the frame number prints as an integer index.

use std::io::Write;

use katexport_core::prelude::*;

use super::AnimDocument;

/// Encode an animation document into the text container
pub fn encode(doc: &AnimDocument) -> Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();

    write!(buf, "keyframes [{}]\n", doc.frame_count())?;
    write!(buf, "frames per sec [{}]\n\n", doc.fps)?;

    for frame in &doc.frames {
        write!(buf, "frame [{}]\n", frame.time as i64)?;
        write_triple(&mut buf, &doc.labels[0], frame.position)?;
        write_triple(&mut buf, &doc.labels[1], frame.rotation)?;
        write_triple(&mut buf, &doc.labels[2], frame.scale)?;
    }

    Ok(buf)
}

fn write_triple(buf: &mut Vec<u8>, label: &str, v: Vec3) -> Result<()> {
    write!(buf, "[{}] {:.6}, {:.6}, {:.6}\n", label, v.x, v.y, v.z)?;
    Ok(())
}
