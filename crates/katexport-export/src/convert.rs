//! Conversion between the authoring tool's conventions and the Kat formats
//!
//! The target engine is Y-up with the authoring tool's X folded into -Z, and
//! expects rotation angles as positive radians.

use katexport_core::Vec3;
use std::f32::consts::TAU;

/// Fold a signed angle into the format's positive-angle convention
///
/// `-a` for negative input, `2π - a` otherwise. This is a reflection rule,
/// not a modulo wrap: the sign of the angle becomes a direction already
/// baked into the value, and inputs just below and just above zero map far
/// apart. The consuming engine expects exactly this convention.
pub fn normalize_angle(a: f32) -> f32 {
    if a < 0.0 {
        -a
    } else {
        TAU - a
    }
}

/// Map a vector from the authoring frame to the target frame: `(y, z, -x)`
///
/// Applied to positions, normals, tangents and binormals alike.
pub fn map_vector(v: Vec3) -> Vec3 {
    Vec3::new(v.y, v.z, -v.x)
}

/// Map a Euler rotation triple: permute `(y, z, x)`, then fold each
/// component positive with [`normalize_angle`]. No axis is negated.
pub fn map_rotation(r: Vec3) -> Vec3 {
    Vec3::new(
        normalize_angle(r.y),
        normalize_angle(r.z),
        normalize_angle(r.x),
    )
}

/// Map a scale triple: the `(y, z, x)` permutation only
pub fn map_scale(s: Vec3) -> Vec3 {
    Vec3::new(s.y, s.z, s.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_negative() {
        assert_eq!(normalize_angle(-1.0), 1.0);
        assert_eq!(normalize_angle(-0.5), 0.5);
    }

    #[test]
    fn test_normalize_angle_positive() {
        assert!((normalize_angle(1.0) - (TAU - 1.0)).abs() < 1e-6);
        // Zero is "positive": it maps to a full turn, not to zero
        assert_eq!(normalize_angle(0.0), TAU);
    }

    #[test]
    fn test_normalize_angle_discontinuity() {
        // The reflection rule is discontinuous at zero
        let below = normalize_angle(-1e-3);
        let above = normalize_angle(1e-3);
        assert!((below - above).abs() > 6.0);
    }

    #[test]
    fn test_map_vector() {
        let v = map_vector(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vec3::new(2.0, 3.0, -1.0));
    }

    #[test]
    fn test_map_rotation_permutes_then_folds() {
        let r = map_rotation(Vec3::new(-0.5, 0.25, -0.75));
        // x' = fold(y), y' = fold(z), z' = fold(x)
        assert!((r.x - (TAU - 0.25)).abs() < 1e-6);
        assert_eq!(r.y, 0.75);
        assert_eq!(r.z, 0.5);
    }

    #[test]
    fn test_map_scale_no_negation() {
        let s = map_scale(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s, Vec3::new(2.0, 3.0, 1.0));
    }
}
