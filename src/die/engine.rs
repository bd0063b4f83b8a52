//! Roll engine
//!
//! Owns the die's value and its Idle/Rolling state. A roll decides the face
//! immediately and schedules a single settle; the host loop drives time forward
//! with [`RollEngine::tick`].

use bevy::log::debug;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;

use crate::die::types::{
    AppSettings, DieSnapshot, FaceValue, RollId, RollRecord, RollStarted, RollState, Settled,
};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Handle for the one settle that may be outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSettle {
    pub roll: RollId,
    pub remaining: Duration,
}

#[derive(Resource, Debug)]
pub struct RollEngine {
    snapshot: DieSnapshot,
    settle_delay: Duration,
    pending: Option<PendingSettle>,
    next_roll: u64,
    /// Sum of all ticks so far
    clock: Duration,
    history: VecDeque<RollRecord>,
    history_capacity: usize,
    rng: StdRng,
}

impl Default for RollEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl RollEngine {
    pub fn new(settle_delay: Duration) -> Self {
        Self::with_rng(settle_delay, StdRng::from_entropy())
    }

    /// Deterministic engine for tests and replays.
    pub fn with_seed(settle_delay: Duration, seed: u64) -> Self {
        Self::with_rng(settle_delay, StdRng::seed_from_u64(seed))
    }

    /// Out-of-range settings are clamped first.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let settings = settings.clone().sanitized();
        let mut engine = Self::new(settings.settle_delay());
        engine.history_capacity = settings.history_capacity;
        engine
    }

    fn with_rng(settle_delay: Duration, rng: StdRng) -> Self {
        Self {
            snapshot: DieSnapshot::default(),
            settle_delay,
            pending: None,
            next_roll: 1,
            clock: Duration::ZERO,
            history: VecDeque::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            rng,
        }
    }

    pub fn snapshot(&self) -> DieSnapshot {
        self.snapshot
    }

    pub fn current_face(&self) -> FaceValue {
        self.snapshot.current_face
    }

    pub fn is_rolling(&self) -> bool {
        self.snapshot.is_rolling()
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Takes effect from the next roll; a pending settle keeps its deadline.
    pub fn set_settle_delay(&mut self, delay: Duration) {
        self.settle_delay = delay;
    }

    pub fn pending_settle(&self) -> Option<PendingSettle> {
        self.pending
    }

    /// Engine time, i.e. the sum of every `tick` delta.
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Most recent settled rolls, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &RollRecord> {
        self.history.iter()
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history_capacity = capacity;
        self.trim_history();
    }

    /// Start a roll if the die is idle. While rolling this does nothing and
    /// returns `None`.
    pub fn roll(&mut self) -> Option<RollStarted> {
        if self.is_rolling() {
            debug!("Roll ignored, {:?} still in flight", self.pending.map(|p| p.roll));
            return None;
        }
        Some(self.begin_roll())
    }

    /// Start a roll unconditionally, cancelling any settle still pending.
    pub fn restart_roll(&mut self) -> RollStarted {
        self.begin_roll()
    }

    /// Advance engine time. Returns the settle if its deadline falls inside
    /// this tick.
    pub fn tick(&mut self, delta: Duration) -> Option<Settled> {
        let Some(pending) = self.pending.as_mut() else {
            self.clock += delta;
            return None;
        };

        if delta < pending.remaining {
            pending.remaining -= delta;
            self.clock += delta;
            return None;
        }

        let at = self.clock + pending.remaining;
        let roll = pending.roll;
        self.pending = None;
        self.clock += delta;
        Some(self.settle(roll, at))
    }

    fn begin_roll(&mut self) -> RollStarted {
        let cancelled = self.pending.take().map(|p| p.roll);
        if let Some(prev) = cancelled {
            debug!("Cancelled pending settle for {:?}", prev);
        }

        let face = FaceValue::ALL[self.rng.gen_range(0..FaceValue::ALL.len())];
        let roll = RollId(self.next_roll);
        self.next_roll += 1;

        self.snapshot = DieSnapshot {
            current_face: face,
            state: RollState::Rolling,
        };
        self.pending = Some(PendingSettle {
            roll,
            remaining: self.settle_delay,
        });

        RollStarted {
            roll,
            face,
            cancelled,
        }
    }

    fn settle(&mut self, roll: RollId, at: Duration) -> Settled {
        self.snapshot.state = RollState::Idle;
        let face = self.snapshot.current_face;

        self.history.push_back(RollRecord {
            roll,
            face,
            settled_at: at,
        });
        self.trim_history();

        Settled { roll, face, at }
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.history_capacity {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn engine() -> RollEngine {
        RollEngine::with_seed(DEFAULT_SETTLE_DELAY, 7)
    }

    #[test]
    fn test_new_engine_is_idle_on_one() {
        let engine = engine();
        assert!(!engine.is_rolling());
        assert_eq!(engine.current_face(), FaceValue::ONE);
        assert!(engine.pending_settle().is_none());
        assert_eq!(engine.history().count(), 0);
    }

    #[test]
    fn test_roll_sets_face_immediately() {
        let mut engine = engine();
        let started = engine.roll().unwrap();
        assert!(engine.is_rolling());
        assert_eq!(engine.current_face(), started.face);
        assert_eq!(started.cancelled, None);
        assert_eq!(
            engine.pending_settle(),
            Some(PendingSettle {
                roll: started.roll,
                remaining: DEFAULT_SETTLE_DELAY
            })
        );
    }

    #[test]
    fn test_tick_without_pending_only_advances_clock() {
        let mut engine = engine();
        assert!(engine.tick(250 * MS).is_none());
        assert_eq!(engine.elapsed(), 250 * MS);
    }

    #[test]
    fn test_overshooting_tick_reports_exact_deadline() {
        let mut engine = engine();
        engine.tick(100 * MS);
        engine.roll().unwrap();
        let settled = engine.tick(Duration::from_secs(5)).unwrap();
        assert_eq!(settled.at, 1100 * MS);
        assert_eq!(engine.elapsed(), 5100 * MS);
    }

    #[test]
    fn test_zero_delay_settles_on_next_tick() {
        let mut engine = RollEngine::with_seed(Duration::ZERO, 1);
        engine.roll().unwrap();
        assert!(engine.is_rolling());
        assert!(engine.tick(Duration::ZERO).is_some());
        assert!(!engine.is_rolling());
    }

    #[test]
    fn test_settle_delay_change_applies_to_next_roll() {
        let mut engine = engine();
        engine.roll().unwrap();
        engine.set_settle_delay(300 * MS);
        assert!(engine.tick(300 * MS).is_none());
        assert!(engine.tick(700 * MS).is_some());

        engine.roll().unwrap();
        assert!(engine.tick(300 * MS).is_some());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut engine = engine();
        engine.set_history_capacity(3);
        for _ in 0..5 {
            engine.roll().unwrap();
            engine.tick(DEFAULT_SETTLE_DELAY).unwrap();
        }
        let ids: Vec<u64> = engine.history().map(|r| r.roll.0).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_from_settings_uses_delay_and_capacity() {
        let settings = AppSettings {
            settle_delay_seconds: 0.5,
            history_capacity: 2,
            ..AppSettings::default()
        };
        let mut engine = RollEngine::from_settings(&settings);
        assert_eq!(engine.settle_delay(), 500 * MS);
        for _ in 0..4 {
            engine.roll().unwrap();
            engine.tick(500 * MS).unwrap();
        }
        assert_eq!(engine.history().count(), 2);
    }

    #[test]
    fn test_from_settings_clamps_huge_delay() {
        let settings = AppSettings {
            settle_delay_seconds: 1e30,
            history_capacity: usize::MAX,
            ..AppSettings::default()
        };
        let engine = RollEngine::from_settings(&settings);
        assert_eq!(engine.settle_delay(), Duration::from_secs(10));
    }
}
