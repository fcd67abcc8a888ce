//! JSON authoring document.
//!
//! A document is a list of authoring intents, not a snapshot of the model.
//! [`ModelDocument::build`] replays it through the [`StateMachine`] command set,
//! so the same invariants and no-op rules apply as for interactive edits.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::coords::{Level, Position, Variant},
    foundation::error::{RoofvogelError, RoofvogelResult},
    model::machine::StateMachine,
    model::state::{BirdMode, StateKey, StatePatch},
    model::transition::TransitionId,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Authoring intents, applied section by section in field order.
pub struct ModelDocument {
    /// Overlay variants to add as full 30-state batches.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Individual states to add.
    #[serde(default)]
    pub states: Vec<StateDoc>,
    /// Bird placements to merge into existing states.
    #[serde(default)]
    pub birds: Vec<BirdDoc>,
    /// Transitions to add.
    #[serde(default)]
    pub transitions: Vec<TransitionDoc>,
    /// Transitions to remove, by endpoint pair.
    #[serde(default)]
    pub remove_transitions: Vec<TransitionRefDoc>,
    /// States to remove, by short label.
    #[serde(default)]
    pub remove_states: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One state to add.
pub struct StateDoc {
    /// Raw level, validated on build.
    pub level: u8,
    /// Raw position, validated on build.
    pub position: u8,
    /// Variant.
    pub variant: Variant,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Bird attributes for one state. Absent fields keep their current value.
pub struct BirdDoc {
    /// Short label of the target state.
    pub state: String,
    /// Remove the bird and reset its mode before merging the other fields.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub clear: bool,
    /// Bird level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Bird position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u8>,
    /// Bird mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<BirdMode>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One transition to add.
pub struct TransitionDoc {
    /// Short label of the source state.
    pub from: String,
    /// Short label of the target state.
    pub to: String,
    /// Optional display label; defaults to the axis icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Endpoint pair naming an existing transition.
pub struct TransitionRefDoc {
    /// Short label of the source state.
    pub from: String,
    /// Short label of the target state.
    pub to: String,
}

impl ModelDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RoofvogelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RoofvogelError::serde(format!("parse model document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json(s: &str) -> RoofvogelResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| RoofvogelError::serde(format!("parse model document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RoofvogelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RoofvogelError::validation(format!("open model document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Replay the document onto a fresh model.
    pub fn build(&self) -> RoofvogelResult<StateMachine> {
        let mut machine = StateMachine::new();
        self.apply(&mut machine)?;
        Ok(machine)
    }

    /// Replay the document onto an existing model.
    ///
    /// Input is validated section by section; an error leaves earlier
    /// sections applied. Duplicate or refused intents are silent no-ops.
    #[tracing::instrument(skip_all)]
    pub fn apply(&self, machine: &mut StateMachine) -> RoofvogelResult<()> {
        for variant in &self.variants {
            let added = machine.add_variant_batch(*variant);
            tracing::debug!(%variant, added, "variant batch");
        }

        for s in &self.states {
            machine.add_state(Level::new(s.level)?, Position::new(s.position)?, s.variant);
        }

        for b in &self.birds {
            let key = resolve(machine, &b.state)?;
            let patch = StatePatch {
                bird_level: b.level.map(Level::new).transpose()?.map(Some),
                bird_position: b.position.map(Position::new).transpose()?.map(Some),
                bird_mode: b.mode,
            };
            if b.clear {
                let reset = StatePatch::clear_bird().with_mode(BirdMode::default());
                machine.update_state(key, &reset);
            }
            machine.update_state(key, &patch);
        }

        for t in &self.transitions {
            let from = resolve(machine, &t.from)?;
            let to = resolve(machine, &t.to)?;
            if machine.add_transition(from, to, t.label.as_deref()).is_none() {
                tracing::debug!(from = %t.from, to = %t.to, "transition ignored");
            }
        }

        for t in &self.remove_transitions {
            let id = TransitionId::new(
                StateKey::parse_short_label(&t.from)?,
                StateKey::parse_short_label(&t.to)?,
            );
            machine.remove_transition(id);
        }

        for label in &self.remove_states {
            machine.remove_state(StateKey::parse_short_label(label)?);
        }

        Ok(())
    }
}

fn resolve(machine: &StateMachine, label: &str) -> RoofvogelResult<StateKey> {
    let key = StateKey::parse_short_label(label)?;
    if !machine.states().contains(key) {
        return Err(RoofvogelError::validation(format!("unknown state '{label}'")));
    }
    Ok(key)
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
