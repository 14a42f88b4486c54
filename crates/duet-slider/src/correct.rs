//! Handle crossing.
//!
//! The two physical handles keep their role tags for their whole life. When
//! one is dragged through the other, the values are re-labelled instead: the
//! moving handle's value becomes the other edge of the range and the
//! stationary handle's value takes over the vacated one.

use crate::{HandlePositions, HandleRole, RangeValue};

/// Result of moving one handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    pub value: RangeValue,
    /// The `min`-tagged handle now sits above the `max`-tagged one.
    pub swapped: bool,
}

/// Applies a move of the `moved` handle to `new_position`.
///
/// `current` is the pair before the move; raw handle positions are accepted
/// so a drag that already crossed keeps pairing with the stationary handle.
pub fn correct(
    new_position: f64,
    moved: HandleRole,
    current: impl Into<HandlePositions>,
) -> Correction {
    let current = current.into();
    let (value, swapped) = match moved {
        HandleRole::Min => {
            if new_position <= current.max {
                (RangeValue::new(new_position, current.max), false)
            } else {
                (RangeValue::new(current.max, new_position), true)
            }
        }
        HandleRole::Max => {
            if new_position > current.min {
                (RangeValue::new(current.min, new_position), false)
            } else {
                (RangeValue::new(new_position, current.min), true)
            }
        }
    };
    if swapped {
        log::debug!("{moved} handle crossed at {new_position}; corrected to {value}");
    }
    Correction { value, swapped }
}
