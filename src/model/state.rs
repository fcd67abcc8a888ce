use std::fmt;
use std::str::FromStr;

use crate::foundation::coords::{Level, Position, Variant};
use crate::foundation::error::{RoofvogelError, RoofvogelResult};

/// Identity of a state: its `(variant, level, position)` triple.
///
/// Keys are plain values. Transitions refer to states through keys and never
/// own them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct StateKey {
    /// Board variant.
    pub variant: Variant,
    /// Board level.
    pub level: Level,
    /// Board position.
    pub position: Position,
}

impl StateKey {
    /// Build a key from already validated coordinates.
    pub fn new(level: Level, position: Position, variant: Variant) -> Self {
        Self {
            variant,
            level,
            position,
        }
    }

    /// Validate raw coordinates and build a key.
    pub fn from_raw(level: u8, position: u8, variant: Variant) -> RoofvogelResult<Self> {
        Ok(Self::new(Level::new(level)?, Position::new(position)?, variant))
    }

    /// What the player sees: `L2 P15`. Overlay variants are invisible.
    pub fn display_label(&self) -> String {
        format!("L{} P{}", self.level, self.position)
    }

    /// Display label with the variant appended for overlays: `L2 P15 [ζ]`.
    pub fn full_label(&self) -> String {
        if self.variant.is_base() {
            self.display_label()
        } else {
            format!("L{} P{} [{}]", self.level, self.position, self.variant)
        }
    }

    /// Compact label used in tables and documents: `L2P15`, `ζL2P15`.
    pub fn short_label(&self) -> String {
        format!(
            "{}L{}P{}",
            self.variant.label_prefix(),
            self.level,
            self.position
        )
    }

    /// Parse a short label as produced by [`StateKey::short_label`].
    pub fn parse_short_label(label: &str) -> RoofvogelResult<Self> {
        let label = label.trim();
        let (variant, rest) = Variant::overlays()
            .find_map(|v| label.strip_prefix(v.as_str()).map(|rest| (v, rest)))
            .unwrap_or((Variant::BASE, label));

        let malformed = || RoofvogelError::validation(format!("malformed state label '{label}'"));
        let rest = rest.strip_prefix('L').ok_or_else(malformed)?;
        let (level, position) = rest.split_once('P').ok_or_else(malformed)?;
        let level = parse_digits(level).ok_or_else(malformed)?;
        let position = parse_digits(position).ok_or_else(malformed)?;
        Self::from_raw(level, position, variant)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.variant, self.level, self.position)
    }
}

impl FromStr for StateKey {
    type Err = RoofvogelError;

    /// Parse the `variant-level-position` form produced by `Display`.
    fn from_str(s: &str) -> RoofvogelResult<Self> {
        let malformed = || RoofvogelError::validation(format!("malformed state key '{s}'"));
        let mut parts = s.trim().rsplitn(3, '-');
        let position = parts.next().ok_or_else(malformed)?;
        let level = parts.next().ok_or_else(malformed)?;
        let variant = parts.next().ok_or_else(malformed)?;
        let level = parse_digits(level).ok_or_else(malformed)?;
        let position = parse_digits(position).ok_or_else(malformed)?;
        Self::from_raw(level, position, variant.parse()?)
    }
}

// Plain decimal only; `u8::from_str` would also take a leading `+`.
fn parse_digits(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// How the bird behaves when a state is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirdMode {
    /// Circling; no animation.
    #[default]
    Flying,
    /// Attacking; currently rendered like flying.
    Attacking,
    /// Grabbing; gets the grab animation.
    Grabbing,
}

impl BirdMode {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            BirdMode::Flying => "flying",
            BirdMode::Attacking => "attacking",
            BirdMode::Grabbing => "grabbing",
        }
    }
}

impl fmt::Display for BirdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BirdMode {
    type Err = RoofvogelError;

    fn from_str(s: &str) -> RoofvogelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flying" => Ok(BirdMode::Flying),
            "attacking" => Ok(BirdMode::Attacking),
            "grabbing" => Ok(BirdMode::Grabbing),
            other => Err(RoofvogelError::validation(format!(
                "unknown bird mode '{other}'"
            ))),
        }
    }
}

/// A node of the state table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct State {
    #[serde(flatten)]
    key: StateKey,
    /// Bird latitude, independent of the state's own level.
    pub bird_level: Option<Level>,
    /// Bird longitude, independent of the state's own position.
    pub bird_position: Option<Position>,
    /// Bird behaviour.
    pub bird_mode: BirdMode,
}

impl State {
    pub(crate) fn new(key: StateKey) -> Self {
        Self {
            key,
            bird_level: None,
            bird_position: None,
            bird_mode: BirdMode::Flying,
        }
    }

    /// Immutable identity.
    pub fn key(&self) -> StateKey {
        self.key
    }

    /// State level.
    pub fn level(&self) -> Level {
        self.key.level
    }

    /// State position.
    pub fn position(&self) -> Position {
        self.key.position
    }

    /// State variant.
    pub fn variant(&self) -> Variant {
        self.key.variant
    }

    /// `true` for the permanent base-grid states.
    pub fn is_base(&self) -> bool {
        self.key.variant.is_base()
    }

    /// Bird cell, present only when both coordinates are set.
    pub fn bird_cell(&self) -> Option<(Level, Position)> {
        self.bird_level.zip(self.bird_position)
    }

    /// `true` when the bird is visible in this state.
    pub fn has_bird(&self) -> bool {
        self.bird_cell().is_some()
    }
}

/// Partial update of a state's bird attributes.
///
/// The outer `Option` means "leave unchanged"; the inner one means "unset".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatePatch {
    /// New bird level, if changing.
    pub bird_level: Option<Option<Level>>,
    /// New bird position, if changing.
    pub bird_position: Option<Option<Position>>,
    /// New bird mode, if changing.
    pub bird_mode: Option<BirdMode>,
}

impl StatePatch {
    /// Place the bird on a cell.
    pub fn bird_at(level: Level, position: Position) -> Self {
        Self {
            bird_level: Some(Some(level)),
            bird_position: Some(Some(position)),
            bird_mode: None,
        }
    }

    /// Remove the bird.
    pub fn clear_bird() -> Self {
        Self {
            bird_level: Some(None),
            bird_position: Some(None),
            bird_mode: None,
        }
    }

    /// Also set the bird mode.
    pub fn with_mode(mut self, mode: BirdMode) -> Self {
        self.bird_mode = Some(mode);
        self
    }

    pub(crate) fn apply(&self, state: &mut State) {
        if let Some(level) = self.bird_level {
            state.bird_level = level;
        }
        if let Some(position) = self.bird_position {
            state.bird_position = position;
        }
        if let Some(mode) = self.bird_mode {
            state.bird_mode = mode;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/state.rs"]
mod tests;
