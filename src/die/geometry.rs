//! Face geometry
//!
//! Pure lookups from a face value to the pip layout printed on that face and to
//! the rotation that brings that face to the top. Both tables are total over
//! [`FaceValue`]; the `_for` variants check raw integers first.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::die::meshes::D6_FACE_NORMALS;
use crate::die::types::{FaceValue, InvalidFace};

const PIPS_1: [Vec2; 1] = [Vec2::new(0.5, 0.5)];
const PIPS_2: [Vec2; 2] = [Vec2::new(0.3, 0.3), Vec2::new(0.7, 0.7)];
const PIPS_3: [Vec2; 3] = [Vec2::new(0.3, 0.3), Vec2::new(0.5, 0.5), Vec2::new(0.7, 0.7)];
const PIPS_4: [Vec2; 4] = [
    Vec2::new(0.3, 0.3),
    Vec2::new(0.3, 0.7),
    Vec2::new(0.7, 0.3),
    Vec2::new(0.7, 0.7),
];
const PIPS_5: [Vec2; 5] = [
    Vec2::new(0.3, 0.3),
    Vec2::new(0.3, 0.7),
    Vec2::new(0.5, 0.5),
    Vec2::new(0.7, 0.3),
    Vec2::new(0.7, 0.7),
];
const PIPS_6: [Vec2; 6] = [
    Vec2::new(0.3, 0.3),
    Vec2::new(0.3, 0.5),
    Vec2::new(0.3, 0.7),
    Vec2::new(0.7, 0.3),
    Vec2::new(0.7, 0.5),
    Vec2::new(0.7, 0.7),
];

const PIP_LAYOUTS: [&[Vec2]; 6] = [&PIPS_1, &PIPS_2, &PIPS_3, &PIPS_4, &PIPS_5, &PIPS_6];

/// Euler angles (x, y, z) per face. Each entry rotates about a single axis, so
/// the Euler order does not matter.
const UPRIGHT_ORIENTATIONS: [Vec3; 6] = [
    // 1: front (+Z) up
    Vec3::new(-FRAC_PI_2, 0.0, 0.0),
    // 2: bottom up
    Vec3::new(PI, 0.0, 0.0),
    // 3: right (+X) up
    Vec3::new(0.0, 0.0, FRAC_PI_2),
    // 4: left (-X) up
    Vec3::new(0.0, 0.0, -FRAC_PI_2),
    // 5: already on top
    Vec3::ZERO,
    // 6: back (-Z) up
    Vec3::new(FRAC_PI_2, 0.0, 0.0),
];

/// Rest-frame outward normal of the side carrying each face. Must agree with
/// `D6_FACE_NORMALS`.
const FACE_NORMALS: [Vec3; 6] = [
    Vec3::Z,
    Vec3::NEG_Y,
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Z,
];

/// Pip centers for a face, in the unit square with y pointing up.
pub fn pip_layout(face: FaceValue) -> &'static [Vec2] {
    PIP_LAYOUTS[face.index()]
}

pub fn pip_layout_for(value: u32) -> Result<&'static [Vec2], InvalidFace> {
    FaceValue::new(value).map(pip_layout)
}

/// Euler angles (x, y, z) in radians that bring `face` to the top when applied
/// to the die at rest.
pub fn upright_orientation(face: FaceValue) -> Vec3 {
    UPRIGHT_ORIENTATIONS[face.index()]
}

pub fn upright_orientation_for(value: u32) -> Result<Vec3, InvalidFace> {
    FaceValue::new(value).map(upright_orientation)
}

/// [`upright_orientation`] as a quaternion.
pub fn upright_rotation(face: FaceValue) -> Quat {
    let angles = upright_orientation(face);
    Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}

/// Outward normal of the cube side carrying `face`, in the die's rest frame.
pub fn face_normal(face: FaceValue) -> Vec3 {
    FACE_NORMALS[face.index()]
}

/// The face pointing most nearly up for a die with the given rotation.
pub fn upward_face(rotation: Quat) -> FaceValue {
    let up = Vec3::Y;
    let mut best_match = FaceValue::FIVE;
    let mut best_dot = -2.0_f32;

    for (normal, value) in &D6_FACE_NORMALS {
        let world_normal = rotation * *normal;
        let dot = world_normal.dot(up);

        if dot > best_dot {
            best_dot = dot;
            best_match = *value;
        }
    }

    best_match
}
