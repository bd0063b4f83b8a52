//! Roll-related types
//!
//! This module contains the observable die state (RollState, DieSnapshot),
//! roll identifiers, and the messages that carry roll requests and settle
//! notifications between systems.

use bevy::prelude::*;
use std::time::Duration;

use super::FaceValue;

/// Whether a roll is currently in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RollState {
    #[default]
    Idle,
    Rolling,
}

/// What the UI may read about the die.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DieSnapshot {
    pub current_face: FaceValue,
    pub state: RollState,
}

impl DieSnapshot {
    pub fn is_rolling(&self) -> bool {
        self.state == RollState::Rolling
    }
}

/// Monotonic identifier assigned to every roll the engine starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollId(pub u64);

/// Where a roll request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollTrigger {
    /// The on-screen roll button
    Button,
    /// Space or Enter
    Keyboard,
    /// `--roll` or the `diceapp://roll` link passed at startup
    Launch,
}

impl RollTrigger {
    pub const DEEP_LINK: &'static str = "diceapp://roll";

    /// Map a deep link to a trigger. Only `diceapp://roll` is recognised.
    pub fn from_deep_link(url: &str) -> Option<RollTrigger> {
        let url = url.trim().trim_end_matches('/');
        if url.eq_ignore_ascii_case(Self::DEEP_LINK) {
            Some(RollTrigger::Launch)
        } else {
            None
        }
    }
}

/// Returned by the engine when a roll actually starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollStarted {
    pub roll: RollId,
    pub face: FaceValue,
    /// Settle that this roll cancelled, if it superseded one
    pub cancelled: Option<RollId>,
}

/// Returned by the engine when the pending settle fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub roll: RollId,
    pub face: FaceValue,
    /// Engine-clock instant of the settle deadline
    pub at: Duration,
}

/// Entry in the transient roll history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollRecord {
    pub roll: RollId,
    pub face: FaceValue,
    pub settled_at: Duration,
}

/// Ask for a roll. Every trigger source funnels into this message.
#[derive(Message, Clone, Copy, Debug)]
pub struct RollRequested {
    pub trigger: RollTrigger,
}

/// Written once per roll when the engine transitions back to Idle.
#[derive(Message, Clone, Copy, Debug)]
pub struct DieSettled {
    pub roll: RollId,
    pub face: FaceValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_state_default_is_idle() {
        assert_eq!(RollState::default(), RollState::Idle);
        let snapshot = DieSnapshot::default();
        assert!(!snapshot.is_rolling());
        assert_eq!(snapshot.current_face, FaceValue::ONE);
    }

    #[test]
    fn test_deep_link_parsing() {
        assert_eq!(
            RollTrigger::from_deep_link("diceapp://roll"),
            Some(RollTrigger::Launch)
        );
        assert_eq!(
            RollTrigger::from_deep_link(" DICEAPP://roll/ "),
            Some(RollTrigger::Launch)
        );
        assert_eq!(RollTrigger::from_deep_link("diceapp://about"), None);
        assert_eq!(RollTrigger::from_deep_link(""), None);
    }
}
