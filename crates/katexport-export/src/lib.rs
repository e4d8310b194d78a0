//! katexport Export Pipeline
//!
//! Exports triangulated mesh geometry and per-frame transform animation
//! handed over by a host authoring tool into the Kat container formats:
//!
//! | Format        | Extension | Forms          |
//! |---------------|-----------|----------------|
//! | Kat Mesh      | `.kmesh`  | binary or text |
//! | Kat Animation | `.kanim`  | binary or text |
//!
//! Both forms of a format describe the same logical data. One export call
//! performs the whole read-transform-write sequence synchronously and
//! commits the output file atomically; nothing survives between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use katexport_export::{export_mesh, Encoding};
//!
//! let object = host.selected_mesh_snapshot();
//! export_mesh(object.as_ref(), Path::new("cube.kmesh"), Encoding::Binary)?;
//! ```

pub mod convert;
pub mod flatten;
pub mod group;
pub mod kanim;
pub mod kmesh;
pub mod layout;
pub mod scene;
mod sink;

use std::path::Path;

use katexport_core::prelude::*;
use tracing::info;

// Re-export main types
pub use flatten::VertexStream;
pub use group::{Grouping, MaterialGroup};
pub use kanim::{AnimDocument, Keyframe};
pub use kmesh::{MeshDocument, Orientation};
pub use layout::Layout;
pub use scene::{
    AnimationClip, Channel, ChannelSample, Face, Material, MeshObject, ObjectTransform, TriMesh,
};

/// File extension of the Kat Mesh container
pub const KMESH_EXTENSION: &str = "kmesh";

/// File extension of the Kat Animation container
pub const KANIM_EXTENSION: &str = "kanim";

/// Which of the two representations of a container to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Compact binary form with a self-describing offset table
    Binary,
    /// Human-readable line-oriented form of the same data
    Text,
}

/// Export the selected mesh object to a `.kmesh` file
///
/// `None` means the host had no selection and fails with
/// [`Error::NoSelection`]. The file appears at `path` only if the whole
/// export succeeds.
pub fn export_mesh(selected: Option<&MeshObject>, path: &Path, encoding: Encoding) -> Result<()> {
    let object = selected.ok_or(Error::NoSelection)?;

    let doc = MeshDocument::build(object)?;
    let bytes = match encoding {
        Encoding::Binary => kmesh::binary::encode(&doc)?,
        Encoding::Text => kmesh::text::encode(&doc)?,
    };
    sink::commit(path, &bytes)?;

    info!(
        path = %path.display(),
        encoding = ?encoding,
        vertices = doc.vertex_count(),
        materials = doc.material_count(),
        bytes = bytes.len(),
        "Exported mesh"
    );
    Ok(())
}

/// Export the selected object's sampled animation to a `.kanim` file
///
/// Same contract as [`export_mesh`]: `None` selection fails, output is
/// committed atomically.
pub fn export_animation(
    selected: Option<&AnimationClip>,
    path: &Path,
    encoding: Encoding,
) -> Result<()> {
    let clip = selected.ok_or(Error::NoSelection)?;

    let doc = AnimDocument::build(clip)?;
    let bytes = match encoding {
        Encoding::Binary => kanim::binary::encode(&doc)?,
        Encoding::Text => kanim::text::encode(&doc)?,
    };
    sink::commit(path, &bytes)?;

    info!(
        path = %path.display(),
        encoding = ?encoding,
        frames = doc.frame_count(),
        fps = doc.fps,
        bytes = bytes.len(),
        "Exported animation"
    );
    Ok(())
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
