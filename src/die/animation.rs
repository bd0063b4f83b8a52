//! Roll animation
//!
//! A roll tumbles the die for the settle delay and then eases into the
//! upright rotation of the rolled face. `DieMotion` maps elapsed time to a
//! rotation and carries no Bevy system state, so it can be tested directly.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::die::geometry::upright_rotation;
use crate::die::types::{AppSettings, FaceValue};

#[derive(Component, Debug, Clone)]
pub struct DieMotion {
    pub face: FaceValue,
    start: Quat,
    /// Total tumble per axis, radians
    spin: Vec3,
    spin_seconds: f32,
    snap_seconds: f32,
    target: Quat,
    elapsed: f32,
}

impl DieMotion {
    pub fn new(start: Quat, face: FaceValue, spin: Vec3, spin_seconds: f32, snap_seconds: f32) -> Self {
        Self {
            face,
            start,
            spin,
            spin_seconds: spin_seconds.max(0.0),
            snap_seconds: snap_seconds.max(0.0),
            target: upright_rotation(face),
            elapsed: 0.0,
        }
    }

    /// Motion for a freshly started roll, using the timing from settings.
    pub fn for_roll(
        start: Quat,
        face: FaceValue,
        settings: &AppSettings,
        rng: &mut impl Rng,
    ) -> Self {
        let spin = sample_spin(
            rng,
            settings.spin_half_turns_min,
            settings.spin_half_turns_max,
        );
        Self::new(
            start,
            face,
            spin,
            settings.settle_delay_seconds,
            settings.snap_seconds,
        )
    }

    pub fn target(&self) -> Quat {
        self.target
    }

    pub fn total_seconds(&self) -> f32 {
        self.spin_seconds + self.snap_seconds
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_seconds()
    }

    /// Step forward by `dt` seconds and return the rotation to display.
    pub fn advance(&mut self, dt: f32) -> Quat {
        self.elapsed += dt.max(0.0);
        self.rotation()
    }

    pub fn rotation(&self) -> Quat {
        if self.is_finished() {
            return self.target;
        }

        if self.elapsed < self.spin_seconds {
            let t = self.elapsed / self.spin_seconds;
            return self.tumble(t);
        }

        let from = self.tumble(1.0);
        let t = ((self.elapsed - self.spin_seconds) / self.snap_seconds).clamp(0.0, 1.0);
        from.slerp(self.target, t)
    }

    fn tumble(&self, t: f32) -> Quat {
        let angles = self.spin * t;
        (self.start * Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)).normalize()
    }
}

/// Random tumble of `min..max` half turns around each axis.
pub fn sample_spin(rng: &mut impl Rng, min_half_turns: f32, max_half_turns: f32) -> Vec3 {
    let mut axis = || {
        let half_turns = if max_half_turns > min_half_turns {
            rng.gen_range(min_half_turns..max_half_turns)
        } else {
            min_half_turns
        };
        half_turns * PI
    };
    Vec3::new(axis(), axis(), axis())
}
