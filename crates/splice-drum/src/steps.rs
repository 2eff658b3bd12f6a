//! Packed 16-step trigger flags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::header::STEP_COUNT;

/// The 16 trigger flags of a track, packed into a `u16`.
///
/// Bit `i` holds step `i`. Positions outside `0..16` are unrepresentable,
/// so every `Steps` value has exactly 16 steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[bool; STEP_COUNT]", into = "[bool; STEP_COUNT]")]
pub struct Steps(u16);

impl Steps {
    /// No active steps.
    pub const EMPTY: Steps = Steps(0);

    /// Create steps from a bitset where bit `i` is step `i`.
    pub const fn from_bits(bits: u16) -> Self {
        Steps(bits)
    }

    /// The underlying bitset.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Create steps with the listed positions active.
    ///
    /// Returns `None` if any position is 16 or greater.
    pub fn from_positions(positions: &[usize]) -> Option<Self> {
        positions.iter().try_fold(Steps::EMPTY, |steps, &pos| {
            (pos < STEP_COUNT).then(|| steps.with(pos, true))
        })
    }

    /// Create steps from 16 booleans in step order.
    pub fn from_bools(flags: [bool; STEP_COUNT]) -> Self {
        flags
            .iter()
            .enumerate()
            .fold(Steps::EMPTY, |steps, (pos, &active)| steps.with(pos, active))
    }

    /// Whether the step at `pos` is active.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 16`.
    pub fn is_active(self, pos: usize) -> bool {
        assert!(pos < STEP_COUNT, "step index {pos} out of range");
        self.0 & (1 << pos) != 0
    }

    /// Return a copy with the step at `pos` set to `active`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 16`.
    #[must_use]
    pub fn with(self, pos: usize, active: bool) -> Self {
        assert!(pos < STEP_COUNT, "step index {pos} out of range");
        if active {
            Steps(self.0 | (1 << pos))
        } else {
            Steps(self.0 & !(1 << pos))
        }
    }

    /// Iterate the 16 flags in step order.
    pub fn iter(self) -> impl Iterator<Item = bool> {
        (0..STEP_COUNT).map(move |pos| self.is_active(pos))
    }

    /// Positions of the active steps, ascending.
    pub fn active_positions(self) -> Vec<usize> {
        (0..STEP_COUNT).filter(|&pos| self.is_active(pos)).collect()
    }

    /// Number of active steps.
    pub fn count_active(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<[bool; STEP_COUNT]> for Steps {
    fn from(flags: [bool; STEP_COUNT]) -> Self {
        Steps::from_bools(flags)
    }
}

impl From<Steps> for [bool; STEP_COUNT] {
    fn from(steps: Steps) -> Self {
        let mut flags = [false; STEP_COUNT];
        for (flag, active) in flags.iter_mut().zip(steps.iter()) {
            *flag = active;
        }
        flags
    }
}

/// Renders the sequencer grid in bars of four, e.g. `|x---|x---|x---|x---|`.
impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for (pos, active) in self.iter().enumerate() {
            f.write_str(if active { "x" } else { "-" })?;
            if pos % 4 == 3 {
                f.write_str("|")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positions_sets_matching_bits() {
        let steps = Steps::from_positions(&[0, 4, 8, 12]).unwrap();
        assert_eq!(steps.bits(), 0x1111);
        assert_eq!(steps.active_positions(), vec![0, 4, 8, 12]);
        assert_eq!(steps.count_active(), 4);
    }

    #[test]
    fn test_from_positions_rejects_out_of_range() {
        assert_eq!(Steps::from_positions(&[3, 16]), None);
    }

    #[test]
    fn test_with_toggles_single_step() {
        let steps = Steps::EMPTY.with(15, true);
        assert!(steps.is_active(15));
        assert!(!steps.is_active(14));
        assert_eq!(steps.with(15, false), Steps::EMPTY);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_is_active_panics_past_last_step() {
        Steps::EMPTY.is_active(16);
    }

    #[test]
    fn test_bool_array_conversion() {
        let mut flags = [false; STEP_COUNT];
        flags[2] = true;
        flags[10] = true;
        let steps = Steps::from(flags);
        assert_eq!(steps.bits(), 0x0404);
        assert_eq!(<[bool; STEP_COUNT]>::from(steps), flags);
    }

    #[test]
    fn test_display_grid() {
        let steps = Steps::from_bits(0x9011);
        assert_eq!(steps.to_string(), "|x---|x---|----|x--x|");
    }
}
