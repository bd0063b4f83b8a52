use bevy::prelude::*;

use crate::die::types::FaceValue;

/// Edge length of the die in world units.
pub const D6_SIZE: f32 = 1.0;

/// Side of the cube each face value is printed on.
///
/// Order is +Z, +X, -Z, -X, +Y, -Y, carrying 1, 3, 6, 4, 5, 2. At rest the 5 is
/// up; the upright rotations in `geometry` are derived from this table.
pub const D6_FACE_NORMALS: [(Vec3, FaceValue); 6] = [
    (Vec3::Z, FaceValue::ONE),
    (Vec3::X, FaceValue::THREE),
    (Vec3::NEG_Z, FaceValue::SIX),
    (Vec3::NEG_X, FaceValue::FOUR),
    (Vec3::Y, FaceValue::FIVE),
    (Vec3::NEG_Y, FaceValue::TWO),
];

pub fn create_d6() -> (Mesh, Vec<(Vec3, FaceValue)>) {
    let mesh = Mesh::from(Cuboid::new(D6_SIZE, D6_SIZE, D6_SIZE));
    (mesh, D6_FACE_NORMALS.to_vec())
}

/// Quad that carries one face texture, a hair smaller than the cube side.
pub fn create_face_quad() -> Mesh {
    Mesh::from(Rectangle::new(D6_SIZE * 0.96, D6_SIZE * 0.96))
}

/// Where a face quad sits relative to the die center.
pub fn face_quad_offset(normal: Vec3) -> Vec3 {
    normal * (D6_SIZE / 2.0 + 0.002)
}

/// Rotation taking a +Z facing quad onto the given face normal.
pub fn face_quad_rotation(normal: Vec3) -> Quat {
    // Handle the Y-axis cases specially to avoid a degenerate arc
    if normal.y.abs() > 0.99 {
        if normal.y > 0.0 {
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)
        } else {
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)
        }
    } else {
        Quat::from_rotation_arc(Vec3::Z, normal)
    }
}
