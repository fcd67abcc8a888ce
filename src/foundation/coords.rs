//! The fixed discrete coordinate space: levels, positions and variants.
//!
//! Every coordinate type can only be constructed through a validating
//! conversion, so a [`Level`] or [`Position`] value held anywhere in the crate
//! is always inside the space.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{RoofvogelError, RoofvogelResult};

/// Vertical axis of the board. Higher levels render toward the top.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Lowest valid level.
    pub const MIN: u8 = 0;
    /// Highest valid level.
    pub const MAX: u8 = 4;
    /// Number of levels in the space.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Validate a raw level value.
    pub fn new(value: u8) -> RoofvogelResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RoofvogelError::coordinate(format!(
                "level {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Raw level value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All levels in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }

    /// 1-based CSS grid row for a bird at this level (level inverted).
    pub fn grid_row(self) -> i32 {
        5 - i32::from(self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = RoofvogelError;

    fn try_from(value: u8) -> RoofvogelResult<Self> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Horizontal axis of the board.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Leftmost valid position.
    pub const MIN: u8 = 13;
    /// Rightmost valid position.
    pub const MAX: u8 = 18;
    /// Number of positions in the space.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Validate a raw position value.
    pub fn new(value: u8) -> RoofvogelResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RoofvogelError::coordinate(format!(
                "position {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Raw position value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (Self::MIN..=Self::MAX).map(Position)
    }

    /// 1-based CSS grid column for a bird at this position.
    pub fn grid_column(self) -> i32 {
        i32::from(self.0) - 12
    }
}

impl TryFrom<u8> for Position {
    type Error = RoofvogelError;

    fn try_from(value: u8) -> RoofvogelResult<Self> {
        Self::new(value)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of board variants.
///
/// [`Variant::Normaal`] is the base variant: its full grid always exists and
/// can never be deleted. The other variants are overlays.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Variant {
    /// Base variant.
    #[default]
    #[serde(rename = "normaal")]
    Normaal,
    /// First overlay variant.
    #[serde(rename = "ζ", alias = "zeta")]
    Zeta,
    /// Second overlay variant.
    #[serde(rename = "η", alias = "eta")]
    Eta,
}

impl Variant {
    /// All variants in display order, base first.
    pub const ALL: [Variant; 3] = [Variant::Normaal, Variant::Zeta, Variant::Eta];

    /// The permanent base variant.
    pub const BASE: Variant = Variant::Normaal;

    /// Canonical name, also used as the radio value in generated CSS.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Normaal => "normaal",
            Variant::Zeta => "ζ",
            Variant::Eta => "η",
        }
    }

    /// One-glyph tag used in compact tables.
    pub fn short(self) -> &'static str {
        match self {
            Variant::Normaal => "N",
            Variant::Zeta => "ζ",
            Variant::Eta => "η",
        }
    }

    /// Display colour.
    pub fn color(self) -> &'static str {
        match self {
            Variant::Normaal => "#22d3ee",
            Variant::Zeta => "#a78bfa",
            Variant::Eta => "#f472b6",
        }
    }

    /// `true` for the base variant.
    pub fn is_base(self) -> bool {
        self == Self::BASE
    }

    /// Prefix used by short labels; empty for the base variant.
    pub fn label_prefix(self) -> &'static str {
        if self.is_base() { "" } else { self.as_str() }
    }

    /// Overlay variants in display order.
    pub fn overlays() -> impl Iterator<Item = Variant> {
        Self::ALL.into_iter().filter(|v| !v.is_base())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = RoofvogelError;

    fn from_str(s: &str) -> RoofvogelResult<Self> {
        match s.trim() {
            "normaal" | "N" => Ok(Variant::Normaal),
            "ζ" | "zeta" => Ok(Variant::Zeta),
            "η" | "eta" => Ok(Variant::Eta),
            other => Err(RoofvogelError::coordinate(format!(
                "unknown variant '{other}'"
            ))),
        }
    }
}

/// `true` iff the raw triple lies inside the coordinate space.
pub fn is_valid_triple(level: u8, position: u8, variant: &str) -> bool {
    Level::new(level).is_ok() && Position::new(position).is_ok() && variant.parse::<Variant>().is_ok()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/coords.rs"]
mod tests;
