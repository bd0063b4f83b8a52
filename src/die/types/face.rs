//! Face value type
//!
//! A six-sided die only ever shows 1 through 6. `FaceValue` makes any other
//! number unrepresentable once it has been checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A number outside 1..=6 was used where a face value is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid face value {0}: a six-sided die only has faces 1 through 6")]
pub struct InvalidFace(pub u32);

/// The logical result of a roll: an integer in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FaceValue(u8);

impl FaceValue {
    pub const ONE: FaceValue = FaceValue(1);
    pub const TWO: FaceValue = FaceValue(2);
    pub const THREE: FaceValue = FaceValue(3);
    pub const FOUR: FaceValue = FaceValue(4);
    pub const FIVE: FaceValue = FaceValue(5);
    pub const SIX: FaceValue = FaceValue(6);

    /// Every face, in ascending order.
    pub const ALL: [FaceValue; 6] = [
        FaceValue::ONE,
        FaceValue::TWO,
        FaceValue::THREE,
        FaceValue::FOUR,
        FaceValue::FIVE,
        FaceValue::SIX,
    ];

    pub fn new(value: u32) -> Result<Self, InvalidFace> {
        match value {
            1..=6 => Ok(FaceValue(value as u8)),
            _ => Err(InvalidFace(value)),
        }
    }

    pub fn value(self) -> u32 {
        self.0 as u32
    }

    /// Zero-based position of this face in [`FaceValue::ALL`].
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for FaceValue {
    fn default() -> Self {
        FaceValue::ONE
    }
}

impl TryFrom<u32> for FaceValue {
    type Error = InvalidFace;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        FaceValue::new(value)
    }
}

impl From<FaceValue> for u32 {
    fn from(face: FaceValue) -> Self {
        face.value()
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_value_accepts_one_through_six() {
        for v in 1..=6 {
            assert_eq!(FaceValue::new(v).map(FaceValue::value), Ok(v));
        }
    }

    #[test]
    fn test_face_value_rejects_out_of_range() {
        assert_eq!(FaceValue::new(0), Err(InvalidFace(0)));
        assert_eq!(FaceValue::new(7), Err(InvalidFace(7)));
        assert_eq!(FaceValue::new(u32::MAX), Err(InvalidFace(u32::MAX)));
    }

    #[test]
    fn test_face_value_index_matches_all() {
        for (i, face) in FaceValue::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_face_value_serde_rejects_invalid() {
        let face: FaceValue = serde_json::from_str("4").unwrap();
        assert_eq!(face, FaceValue::FOUR);
        assert_eq!(serde_json::to_string(&FaceValue::SIX).unwrap(), "6");
        assert!(serde_json::from_str::<FaceValue>("9").is_err());
    }

    #[test]
    fn test_invalid_face_message_names_value() {
        let msg = InvalidFace(8).to_string();
        assert!(msg.contains('8'));
    }
}
