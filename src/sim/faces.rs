//! Face presentation tables
//!
//! Pure lookups the renderer draws from: pip layouts for flat d6 faces,
//! resting orientations for a d20 mesh, and a banding of results into
//! display tiers. Lookups return `None` for out-of-range faces rather
//! than panicking, since face values can arrive from saved state.

use std::f32::consts::PI;

use glam::Vec3;

use super::die::DieKind;

/// Pip layout for a d6 face on a 3x3 grid, as (row, col) cells.
/// `None` for anything outside 1..=6.
pub fn dot_positions(face: u8) -> Option<&'static [(u8, u8)]> {
    match face {
        1 => Some(&[(1, 1)]),
        2 => Some(&[(0, 0), (2, 2)]),
        3 => Some(&[(0, 0), (1, 1), (2, 2)]),
        4 => Some(&[(0, 0), (0, 2), (2, 0), (2, 2)]),
        5 => Some(&[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]),
        6 => Some(&[(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)]),
        _ => None,
    }
}

/// Euler rotation (radians, XYZ order) that brings a d20 mesh to rest
/// with `face` up. `None` for anything outside 1..=20.
pub fn face_rotation(face: u8) -> Option<Vec3> {
    let rotation = match face {
        1 => Vec3::new(0.0, 0.0, 0.0),
        2 => Vec3::new(PI * 0.3, 0.0, 0.0),
        3 => Vec3::new(-PI * 0.3, 0.0, 0.0),
        4 => Vec3::new(0.0, PI * 0.3, 0.0),
        5 => Vec3::new(0.0, -PI * 0.3, 0.0),
        6 => Vec3::new(PI * 0.6, 0.0, 0.0),
        7 => Vec3::new(-PI * 0.6, 0.0, 0.0),
        8 => Vec3::new(0.0, PI * 0.6, 0.0),
        9 => Vec3::new(0.0, -PI * 0.6, 0.0),
        10 => Vec3::new(PI * 0.4, PI * 0.4, 0.0),
        11 => Vec3::new(PI * 0.4, -PI * 0.4, 0.0),
        12 => Vec3::new(-PI * 0.4, PI * 0.4, 0.0),
        13 => Vec3::new(-PI * 0.4, -PI * 0.4, 0.0),
        14 => Vec3::new(0.0, 0.0, PI * 0.3),
        15 => Vec3::new(0.0, 0.0, -PI * 0.3),
        16 => Vec3::new(PI * 0.3, 0.0, PI * 0.3),
        17 => Vec3::new(PI * 0.3, 0.0, -PI * 0.3),
        18 => Vec3::new(-PI * 0.3, 0.0, PI * 0.3),
        19 => Vec3::new(-PI * 0.3, 0.0, -PI * 0.3),
        20 => Vec3::new(PI, 0.0, 0.0),
        _ => return None,
    };
    Some(rotation)
}

/// Display tier of a settled face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceBand {
    /// Minimum face
    Fumble,
    Low,
    Mid,
    High,
    /// Maximum face
    Critical,
}

impl FaceBand {
    pub fn as_str(self) -> &'static str {
        match self {
            FaceBand::Fumble => "fumble",
            FaceBand::Low => "low",
            FaceBand::Mid => "mid",
            FaceBand::High => "high",
            FaceBand::Critical => "critical",
        }
    }

    /// Extremal bands get the distinguished haptic pattern on settle.
    pub fn is_extremal(self) -> bool {
        matches!(self, FaceBand::Fumble | FaceBand::Critical)
    }
}

/// Band a face by its position in the kind's range: the minimum face is
/// a fumble, the maximum a critical, and interior faces split into
/// thirds. Out-of-range values clamp to the nearest extremal band.
pub fn face_band(kind: DieKind, face: u8) -> FaceBand {
    if face <= kind.min_face() {
        return FaceBand::Fumble;
    }
    if face >= kind.max_face() {
        return FaceBand::Critical;
    }
    let t = f32::from(face - kind.min_face()) / f32::from(kind.max_face() - kind.min_face());
    if t < 1.0 / 3.0 {
        FaceBand::Low
    } else if t < 2.0 / 3.0 {
        FaceBand::Mid
    } else {
        FaceBand::High
    }
}

/// Tint for a band as 0xRRGGBB
pub fn band_color(band: FaceBand) -> u32 {
    match band {
        FaceBand::Fumble => 0xDC2626,
        FaceBand::Low => 0x64748B,
        FaceBand::Mid => 0x0EA5E9,
        FaceBand::High => 0x9333EA,
        FaceBand::Critical => 0xF59E0B,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_count_matches_face_value() {
        for face in 1..=6u8 {
            let dots = dot_positions(face).unwrap();
            assert_eq!(dots.len(), face as usize);
        }
    }

    #[test]
    fn test_dots_stay_on_the_grid() {
        for face in 1..=6u8 {
            for &(row, col) in dot_positions(face).unwrap() {
                assert!(row <= 2);
                assert!(col <= 2);
            }
        }
    }

    #[test]
    fn test_dot_positions_rejects_out_of_range() {
        assert_eq!(dot_positions(0), None);
        assert_eq!(dot_positions(7), None);
    }

    #[test]
    fn test_one_is_centered() {
        assert_eq!(dot_positions(1), Some(&[(1u8, 1u8)][..]));
    }

    #[test]
    fn test_rotation_covers_all_faces() {
        for face in 1..=20u8 {
            assert!(face_rotation(face).is_some(), "face {} missing", face);
        }
        assert_eq!(face_rotation(0), None);
        assert_eq!(face_rotation(21), None);
    }

    #[test]
    fn test_rotations_are_distinct() {
        for a in 1..=20u8 {
            for b in (a + 1)..=20u8 {
                assert_ne!(
                    face_rotation(a),
                    face_rotation(b),
                    "faces {} and {} share a rotation",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_rotation_anchors() {
        assert_eq!(face_rotation(1), Some(Vec3::ZERO));
        assert_eq!(face_rotation(20), Some(Vec3::new(PI, 0.0, 0.0)));
    }

    #[test]
    fn test_band_boundaries_d20() {
        assert_eq!(face_band(DieKind::D20, 1), FaceBand::Fumble);
        assert_eq!(face_band(DieKind::D20, 2), FaceBand::Low);
        assert_eq!(face_band(DieKind::D20, 7), FaceBand::Low);
        assert_eq!(face_band(DieKind::D20, 8), FaceBand::Mid);
        assert_eq!(face_band(DieKind::D20, 13), FaceBand::Mid);
        assert_eq!(face_band(DieKind::D20, 14), FaceBand::High);
        assert_eq!(face_band(DieKind::D20, 19), FaceBand::High);
        assert_eq!(face_band(DieKind::D20, 20), FaceBand::Critical);
    }

    #[test]
    fn test_band_boundaries_d6() {
        assert_eq!(face_band(DieKind::D6, 1), FaceBand::Fumble);
        assert_eq!(face_band(DieKind::D6, 2), FaceBand::Low);
        assert_eq!(face_band(DieKind::D6, 3), FaceBand::Mid);
        assert_eq!(face_band(DieKind::D6, 4), FaceBand::Mid);
        assert_eq!(face_band(DieKind::D6, 5), FaceBand::High);
        assert_eq!(face_band(DieKind::D6, 6), FaceBand::Critical);
    }

    #[test]
    fn test_only_extremes_are_extremal() {
        assert!(FaceBand::Fumble.is_extremal());
        assert!(FaceBand::Critical.is_extremal());
        assert!(!FaceBand::Low.is_extremal());
        assert!(!FaceBand::Mid.is_extremal());
        assert!(!FaceBand::High.is_extremal());
    }

    #[test]
    fn test_band_colors_are_distinct() {
        let bands = [
            FaceBand::Fumble,
            FaceBand::Low,
            FaceBand::Mid,
            FaceBand::High,
            FaceBand::Critical,
        ];
        for (i, &a) in bands.iter().enumerate() {
            for &b in &bands[i + 1..] {
                assert_ne!(band_color(a), band_color(b));
            }
        }
    }
}
