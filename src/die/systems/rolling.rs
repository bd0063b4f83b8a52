//! Roll state systems
//!
//! This module feeds roll requests and frame time into the [`RollEngine`],
//! forwards settle notifications, and poses the die while it tumbles.

use bevy::prelude::*;

use crate::die::animation::DieMotion;
use crate::die::engine::RollEngine;
use crate::die::geometry::upward_face;
use crate::die::types::*;

/// Start at most one roll per batch of requests and attach the tumble to the die
pub fn process_roll_requests(
    mut commands: Commands,
    mut requests: MessageReader<RollRequested>,
    mut engine: ResMut<RollEngine>,
    settings: Res<AppSettings>,
    die_query: Query<(Entity, &Transform), With<DieBody>>,
) {
    for request in requests.read() {
        // Requests while rolling are dropped by the engine.
        let Some(started) = engine.roll() else {
            debug!("Ignoring {:?} roll request while rolling", request.trigger);
            continue;
        };

        info!(
            "Roll {:?} via {:?} -> {}",
            started.roll, request.trigger, started.face
        );

        let mut rng = rand::thread_rng();
        for (entity, transform) in die_query.iter() {
            commands.entity(entity).insert(DieMotion::for_roll(
                transform.rotation,
                started.face,
                &settings,
                &mut rng,
            ));
        }
    }
}

/// Advance the engine clock and announce the settle when it fires
pub fn tick_roll_engine(
    time: Res<Time>,
    mut engine: ResMut<RollEngine>,
    mut settled: MessageWriter<DieSettled>,
) {
    // Read-only check first: an idle engine is never marked changed.
    if !engine.is_rolling() {
        return;
    }

    if let Some(done) = engine.tick(time.delta()) {
        info!("Roll {:?} settled on {}", done.roll, done.face);
        settled.write(DieSettled {
            roll: done.roll,
            face: done.face,
        });
    }
}

/// Pose the die from its motion and drop the motion once it has landed
pub fn animate_die(
    mut commands: Commands,
    time: Res<Time>,
    engine: Res<RollEngine>,
    mut die_query: Query<(Entity, &mut Transform, &mut DieMotion), With<DieBody>>,
) {
    for (entity, mut transform, mut motion) in die_query.iter_mut() {
        transform.rotation = motion.advance(time.delta_secs());

        if motion.is_finished() {
            let shown = upward_face(transform.rotation);
            if shown != engine.current_face() {
                warn!(
                    "Die landed showing {} but the rolled face is {}",
                    shown,
                    engine.current_face()
                );
            }
            commands.entity(entity).remove::<DieMotion>();
        }
    }
}
