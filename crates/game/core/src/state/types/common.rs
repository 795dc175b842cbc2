/// Discrete position expressed in world coordinates.
///
/// Committed positions are always component-wise non-negative; the movement
/// action rejects any delta that would cross either axis below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Candidate position after applying a signed delta to both axes.
    ///
    /// The result may be out of bounds; callers validate before committing.
    pub fn translated(self, delta_x: i64, delta_y: i64) -> Self {
        Self {
            x: self.x + delta_x,
            y: self.y + delta_y,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}
