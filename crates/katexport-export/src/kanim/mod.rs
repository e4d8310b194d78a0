//! Kat Animation (`.kanim`) document model and encoders

pub mod binary;
pub mod text;

use katexport_core::prelude::*;
use tracing::debug;

use crate::convert::{map_rotation, map_scale, map_vector};
use crate::scene::AnimationClip;

/// Channels required per clip: position, rotation and scale, one per axis
pub const REQUIRED_CHANNELS: usize = 9;

/// One exported keyframe, already converted to the target frame
///
/// Read once from the per-channel samples, never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Keyframe {
    /// Frame number the keyframe sits on (the text form prints it as an
    /// integer index)
    pub time: f32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Everything the `.kanim` encoders need
#[derive(Debug, Clone)]
pub struct AnimDocument {
    pub fps: u32,
    pub frames: Vec<Keyframe>,
    /// Host-side labels of the position, rotation and scale channel triples,
    /// printed by the text encoder
    pub labels: [String; 3],
}

impl AnimDocument {
    /// Build the document from pre-aligned per-channel samples
    ///
    /// Channel mapping is positional: 0-2 position, 3-5 rotation, 6-8 scale.
    /// Fewer than nine channels is [`Error::MissingAnimationChannel`]; a
    /// channel shorter than channel 0 is invalid input (the samples are
    /// required to be pre-aligned by frame).
    pub fn build(clip: &AnimationClip) -> Result<Self> {
        if clip.channels.len() < REQUIRED_CHANNELS {
            return Err(Error::MissingAnimationChannel {
                expected: REQUIRED_CHANNELS,
                found: clip.channels.len(),
            });
        }

        let frame_count = clip.channels[0].samples.len();
        for channel in &clip.channels[..REQUIRED_CHANNELS] {
            if channel.samples.len() != frame_count {
                return Err(Error::invalid_geometry(format!(
                    "channel '{}' has {} samples, expected {}",
                    channel.label,
                    channel.samples.len(),
                    frame_count
                )));
            }
        }

        let mut frames = Vec::with_capacity(frame_count);
        for i in 0..frame_count {
            let value = |c: usize| clip.channels[c].samples[i].value;

            frames.push(Keyframe {
                time: clip.channels[0].samples[i].frame,
                position: map_vector(Vec3::new(value(0), value(1), value(2))),
                rotation: map_rotation(Vec3::new(value(3), value(4), value(5))),
                scale: map_scale(Vec3::new(value(6), value(7), value(8))),
            });
        }

        debug!(frames = frame_count, fps = clip.fps, "Built .kanim document");

        Ok(Self {
            fps: clip.fps,
            frames,
            labels: [
                clip.channels[0].label.clone(),
                clip.channels[3].label.clone(),
                clip.channels[6].label.clone(),
            ],
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
