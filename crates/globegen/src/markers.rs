use crate::config::MarkerConfig;
use glam::{Mat3, Quat, Vec3};
use std::f32::consts::TAU;

/// Which of the two perpendicular marker rings a disc sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Varies X and Z (the equator).
    Horizontal,
    /// Varies Y and Z (a meridian).
    Vertical,
}

impl Ring {
    pub const ALL: [Ring; 2] = [Ring::Horizontal, Ring::Vertical];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPlacement {
    pub ring: Ring,
    pub index: usize,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Angle of the `index`-th of `per_ring` evenly spaced markers.
pub fn ring_angle(index: usize, per_ring: usize) -> f32 {
    (index as f32 / per_ring as f32) * TAU
}

pub fn ring_position(ring: Ring, angle: f32, radius: f32) -> Vec3 {
    match ring {
        Ring::Horizontal => Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()),
        Ring::Vertical => Vec3::new(0.0, radius * angle.sin(), radius * angle.cos()),
    }
}

/// Rotation that points a disc's local +Z axis from `position` at the origin,
/// keeping local +Y as close to world up as possible.
pub fn facing_origin(position: Vec3) -> Quat {
    let Some(forward) = (-position).try_normalize() else {
        return Quat::IDENTITY;
    };
    let right = Vec3::Y.cross(forward);
    if right.length_squared() < 1e-8 {
        // Straight above or below the origin, world up is degenerate.
        return Quat::from_rotation_arc(Vec3::Z, forward);
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Full marker layout: the horizontal ring first, then the vertical ring.
pub fn marker_layout(config: &MarkerConfig) -> Vec<MarkerPlacement> {
    Ring::ALL
        .iter()
        .flat_map(|&ring| {
            (0..config.per_ring).map(move |index| {
                let angle = ring_angle(index, config.per_ring);
                let position = ring_position(ring, angle, config.orbit_radius);
                MarkerPlacement {
                    ring,
                    index,
                    position,
                    rotation: facing_origin(position),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f32 = 1e-5;

    fn assert_vec_near(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPS),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_layout_has_two_full_rings() {
        let layout = marker_layout(&MarkerConfig::default());

        assert_eq!(layout.len(), 16);
        let horizontal = layout.iter().filter(|m| m.ring == Ring::Horizontal).count();
        let vertical = layout.iter().filter(|m| m.ring == Ring::Vertical).count();
        assert_eq!(horizontal, 8);
        assert_eq!(vertical, 8);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    #[case(7)]
    fn test_ring_positions(#[case] i: usize) {
        let layout = marker_layout(&MarkerConfig::default());
        let angle = (i as f32 / 8.0) * 2.0 * std::f32::consts::PI;

        let horizontal = layout
            .iter()
            .find(|m| m.ring == Ring::Horizontal && m.index == i)
            .unwrap();
        let vertical = layout
            .iter()
            .find(|m| m.ring == Ring::Vertical && m.index == i)
            .unwrap();

        assert_vec_near(
            horizontal.position,
            Vec3::new(1.8 * angle.cos(), 0.0, 1.8 * angle.sin()),
        );
        assert_vec_near(
            vertical.position,
            Vec3::new(0.0, 1.8 * angle.sin(), 1.8 * angle.cos()),
        );
    }

    #[test]
    fn test_every_marker_sits_on_orbit_radius() {
        for marker in marker_layout(&MarkerConfig::default()) {
            assert!((marker.position.length() - 1.8).abs() < EPS);
        }
    }

    #[test]
    fn test_every_marker_faces_origin() {
        for marker in marker_layout(&MarkerConfig::default()) {
            let facing = marker.rotation * Vec3::Z;
            assert_vec_near(facing, -marker.position.normalize());
            assert!(marker.rotation.is_normalized());
        }
    }

    #[rstest]
    #[case(Vec3::new(0.0, 1.8, 0.0))]
    #[case(Vec3::new(0.0, -1.8, 0.0))]
    fn test_facing_origin_from_poles(#[case] position: Vec3) {
        let facing = facing_origin(position) * Vec3::Z;
        assert_vec_near(facing, -position.normalize());
    }

    #[test]
    fn test_facing_origin_keeps_up_vector_level() {
        let rotation = facing_origin(Vec3::new(1.8, 0.0, 0.0));
        assert_vec_near(rotation * Vec3::Y, Vec3::Y);
    }

    #[test]
    fn test_facing_origin_at_origin_is_identity() {
        assert_eq!(facing_origin(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn test_custom_ring_size() {
        let config = MarkerConfig {
            per_ring: 4,
            orbit_radius: 2.0,
            ..MarkerConfig::default()
        };
        let layout = marker_layout(&config);

        assert_eq!(layout.len(), 8);
        assert_vec_near(layout[1].position, Vec3::new(0.0, 0.0, 2.0));
        assert_vec_near(layout[5].position, Vec3::new(0.0, 2.0, 0.0));
    }
}
