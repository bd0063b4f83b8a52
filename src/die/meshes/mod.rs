pub mod d6;

pub use d6::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::types::FaceValue;
    use bevy::prelude::Vec3;

    #[test]
    fn test_d6_has_6_faces() {
        let (_, face_normals) = create_d6();
        assert_eq!(face_normals.len(), 6, "D6 should have 6 face normals");
        for face in FaceValue::ALL {
            assert_eq!(
                face_normals.iter().filter(|(_, v)| *v == face).count(),
                1,
                "face {} should appear exactly once",
                face
            );
        }
    }

    #[test]
    fn test_opposite_faces_sum_to_seven() {
        for (normal, value) in D6_FACE_NORMALS {
            let (_, opposite) = D6_FACE_NORMALS
                .iter()
                .find(|(n, _)| n.dot(normal) < -0.99)
                .copied()
                .unwrap();
            assert_eq!(value.value() + opposite.value(), 7);
        }
    }

    #[test]
    fn test_face_quad_rotation_points_quad_along_normal() {
        for (normal, _) in D6_FACE_NORMALS {
            let rotated = face_quad_rotation(normal) * Vec3::Z;
            assert!(
                rotated.distance(normal) < 1e-5,
                "quad for {:?} faces {:?}",
                normal,
                rotated
            );
        }
    }

    #[test]
    fn test_face_quad_offset_sits_on_surface() {
        let offset = face_quad_offset(Vec3::X);
        assert!(offset.x > D6_SIZE / 2.0);
        assert_eq!(offset.y, 0.0);
        assert_eq!(offset.z, 0.0);
    }
}
