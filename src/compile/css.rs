//! Stylesheet compiler.
//!
//! Turns the state table into static CSS for the radio-button board: three
//! hidden radio groups (`level`, `position`, `variant`) sit in front of the
//! `.game-board`, and one sibling-selector rule per bird-carrying state shows
//! and places the `.bird` sprite on the board grid.
//!
//! The output is a pure function of the model. Transitions only contribute
//! documentation comments for variant switches; movement between cells is
//! driven by the surrounding page, not by this stylesheet.

use std::fmt::{self, Write as _};

use crate::{
    classify::axis::Axis,
    model::registry::StateRegistry,
    model::state::{BirdMode, State},
    model::transition::TransitionSet,
};

const BANNER: &str = "══════════════════════════════════════════════════════";

const GRAB_ANIMATION: &str = "bird-grab 0.3s ease-in-out";

const GRAB_KEYFRAMES: &str = "@keyframes bird-grab {\n  0% { transform: scale(1); }\n  50% { transform: scale(1.3) translateY(10px); }\n  100% { transform: scale(1); }\n}\n";

/// Counts reported in the stylesheet header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CompileSummary {
    /// Total number of states.
    pub states: usize,
    /// States with a visible bird (both bird coordinates set).
    pub bird_states: usize,
    /// Total number of transitions.
    pub transitions: usize,
}

impl CompileSummary {
    /// Count a model.
    pub fn of(states: &StateRegistry, transitions: &TransitionSet) -> Self {
        Self {
            states: states.len(),
            bird_states: states.with_bird().count(),
            transitions: transitions.len(),
        }
    }
}

/// Compile the model into a complete stylesheet.
///
/// Deterministic: the same model always yields byte-identical text. States
/// are emitted in registry order. A state with only one of its two bird
/// coordinates set gets no rule.
#[tracing::instrument(skip_all, fields(states = states.len(), transitions = transitions.len()))]
pub fn compile(states: &StateRegistry, transitions: &TransitionSet) -> String {
    let mut css = String::new();
    // fmt::Write into a String is infallible.
    let _ = write_stylesheet(&mut css, states, transitions);
    tracing::debug!(bytes = css.len(), "compiled stylesheet");
    css
}

fn write_stylesheet(
    css: &mut String,
    states: &StateRegistry,
    transitions: &TransitionSet,
) -> fmt::Result {
    write_header(css, &CompileSummary::of(states, transitions))?;
    write_scaffolding(css)?;
    for state in states.with_bird() {
        write_bird_rule(css, state)?;
    }
    write_variant_notes(css, states, transitions)?;
    css.push_str(GRAB_KEYFRAMES);
    Ok(())
}

fn write_header(css: &mut String, summary: &CompileSummary) -> fmt::Result {
    writeln!(css, "/* {BANNER}")?;
    writeln!(css, "   ROOFVOGEL NPC — GEGENEREERDE CSS")?;
    writeln!(css, "   Drie-assen model: Level × Positie × Variant")?;
    writeln!(
        css,
        "   States met vogel: {} / {}",
        summary.bird_states, summary.states
    )?;
    writeln!(css, "   Transitions: {}", summary.transitions)?;
    writeln!(css, "   {BANNER} */")?;
    writeln!(css)
}

fn write_scaffolding(css: &mut String) -> fmt::Result {
    writeln!(css, "/* --- Radiogroepen (verborgen) --- */")?;
    writeln!(css, "input[name=\"level\"],")?;
    writeln!(css, "input[name=\"position\"],")?;
    writeln!(css, "input[name=\"variant\"] {{ display: none; }}")?;
    writeln!(css)?;
    writeln!(css, "/* --- Vogel basis --- */")?;
    writeln!(css, ".bird {{ display: none; position: absolute; }}")?;
    writeln!(css)?;
    writeln!(css, "/* --- Vogel positionering per state --- */")
}

fn write_bird_rule(css: &mut String, state: &State) -> fmt::Result {
    let Some((bird_level, bird_position)) = state.bird_cell() else {
        return Ok(());
    };
    let key = state.key();
    let grabbing = state.bird_mode == BirdMode::Grabbing;

    // The trailing space before `*/` is part of the format even without a marker.
    writeln!(
        css,
        "/* {} → vogel op L{} P{} {} */",
        key.full_label(),
        bird_level,
        bird_position,
        if grabbing { "⚠ GEVAAR" } else { "" }
    )?;
    writeln!(
        css,
        "#level-{}:checked ~ #pos-{}:checked ~ #var-{}:checked ~ .game-board .bird {{",
        key.level, key.position, key.variant
    )?;
    writeln!(css, "  display: block;")?;
    writeln!(css, "  grid-column: {};", bird_position.grid_column())?;
    writeln!(css, "  grid-row: {};", bird_level.grid_row())?;
    if grabbing {
        writeln!(css, "  animation: {GRAB_ANIMATION};")?;
    }
    writeln!(css, "}}")?;
    writeln!(css)
}

fn write_variant_notes(
    css: &mut String,
    states: &StateRegistry,
    transitions: &TransitionSet,
) -> fmt::Result {
    let mut notes = transitions.by_axis(Axis::Variant).peekable();
    if notes.peek().is_none() {
        return Ok(());
    }

    writeln!(css, "/* --- Variant-wisselende navigatielabels --- */")?;
    for t in notes {
        let (Some(from), Some(to)) = (states.get(t.from()), states.get(t.to())) else {
            continue;
        };
        writeln!(
            css,
            "/* {} ⟳ {} — onzichtbaar voor speler */",
            from.key().short_label(),
            to.key().short_label()
        )?;
        writeln!(
            css,
            "/* Label verandert variant-radio van \"{}\" naar \"{}\" */",
            from.variant(),
            to.variant()
        )?;
        writeln!(css)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compile/css.rs"]
mod tests;
