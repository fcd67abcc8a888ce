use crate::{
    compile::css::{CompileSummary, compile},
    foundation::coords::{Level, Position, Variant},
    model::registry::StateRegistry,
    model::state::{State, StateKey, StatePatch},
    model::transition::{Transition, TransitionId, TransitionSet},
};

/// The whole authoring model: states plus the transitions between them.
///
/// This is the command surface for the editing layer. Every operation runs to
/// completion and leaves the model consistent; refused operations are no-ops
/// reported through the return value. The stylesheet is derived on demand with
/// [`StateMachine::compile_css`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateMachine {
    states: StateRegistry,
    transitions: TransitionSet,
}

impl StateMachine {
    /// Model holding the base grid and no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the states.
    pub fn states(&self) -> &StateRegistry {
        &self.states
    }

    /// Read access to the transitions.
    pub fn transitions(&self) -> &TransitionSet {
        &self.transitions
    }

    /// Add one state, or return the existing state with this triple.
    pub fn add_state(&mut self, level: Level, position: Position, variant: Variant) -> &State {
        self.states.add_state(StateKey::new(level, position, variant))
    }

    /// Add the full grid for `variant`. Returns the number of new states.
    pub fn add_variant_batch(&mut self, variant: Variant) -> usize {
        self.states.add_variant_batch(variant)
    }

    /// Remove an overlay state and every transition touching it.
    ///
    /// Returns `false` for base states and unknown keys.
    pub fn remove_state(&mut self, key: StateKey) -> bool {
        if self.states.remove_state(key).is_none() {
            return false;
        }
        self.transitions.cascade_on_state_removal(key);
        true
    }

    /// Merge bird attributes into a state. Returns `false` for unknown keys.
    pub fn update_state(&mut self, key: StateKey, patch: &StatePatch) -> bool {
        self.states.update_state(key, patch)
    }

    /// Add `from → to`. Returns `None` when refused.
    pub fn add_transition(
        &mut self,
        from: StateKey,
        to: StateKey,
        label: Option<&str>,
    ) -> Option<&Transition> {
        self.transitions.add_transition(&self.states, from, to, label)
    }

    /// Remove a transition. Returns `false` if it did not exist.
    pub fn remove_transition(&mut self, id: TransitionId) -> bool {
        self.transitions.remove_transition(id).is_some()
    }

    /// Header counts for the current model.
    pub fn summary(&self) -> CompileSummary {
        CompileSummary::of(&self.states, &self.transitions)
    }

    /// Compile the current model into its stylesheet.
    pub fn compile_css(&self) -> String {
        compile(&self.states, &self.transitions)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/machine.rs"]
mod tests;
