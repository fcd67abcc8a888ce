use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::error::{RoofvogelError, RoofvogelResult},
    model::state::{State, StateKey},
};

/// Which coordinate distinguishes the two endpoints of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Level differs.
    Level,
    /// Same level, position differs.
    Position,
    /// Same cell, variant differs. Invisible to the player.
    Variant,
    /// Identical triples; unreachable for two distinct states.
    None,
}

/// Presentation metadata for an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisStyle {
    /// CSS hex colour.
    pub color: &'static str,
    /// Single-glyph icon.
    pub icon: &'static str,
}

impl Axis {
    /// All axes in classification priority order.
    pub const ALL: [Axis; 4] = [Axis::Level, Axis::Position, Axis::Variant, Axis::None];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Level => "level",
            Axis::Position => "position",
            Axis::Variant => "variant",
            Axis::None => "none",
        }
    }

    /// Colour and icon for this axis.
    pub fn style(self) -> AxisStyle {
        match self {
            Axis::Level => AxisStyle {
                color: "#22d3ee",
                icon: "↕",
            },
            Axis::Position => AxisStyle {
                color: "#f59e0b",
                icon: "↔",
            },
            Axis::Variant => AxisStyle {
                color: "#e879f9",
                icon: "⟳",
            },
            Axis::None => AxisStyle {
                color: "#3b82f6",
                icon: "→",
            },
        }
    }

    /// Display colour.
    pub fn color(self) -> &'static str {
        self.style().color
    }

    /// Icon glyph, also the default transition label.
    pub fn icon(self) -> &'static str {
        self.style().icon
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = RoofvogelError;

    fn from_str(s: &str) -> RoofvogelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "level" => Ok(Axis::Level),
            "position" => Ok(Axis::Position),
            "variant" => Ok(Axis::Variant),
            "none" => Ok(Axis::None),
            other => Err(RoofvogelError::validation(format!("unknown axis '{other}'"))),
        }
    }
}

/// Classify the transition between two states.
///
/// Priority is level, then position, then variant: an edge that changes
/// several coordinates is reported as its highest-priority axis only.
pub fn classify(from: &State, to: &State) -> Axis {
    classify_keys(from.key(), to.key())
}

/// [`classify`] on bare keys.
pub fn classify_keys(from: StateKey, to: StateKey) -> Axis {
    if from.level != to.level {
        Axis::Level
    } else if from.position != to.position {
        Axis::Position
    } else if from.variant != to.variant {
        Axis::Variant
    } else {
        Axis::None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/axis.rs"]
mod tests;
