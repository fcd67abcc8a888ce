use crate::{
    foundation::coords::{Level, Position, Variant},
    model::state::{State, StatePatch, StateKey},
};

/// Insertion-ordered set of states, unique by [`StateKey`].
///
/// The registry always holds the full base-variant grid. Mutations are
/// crate-private; callers go through [`crate::StateMachine`] so that state
/// removal cascades into the transition set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRegistry {
    states: Vec<State>,
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRegistry {
    /// Registry holding exactly the base grid.
    pub fn new() -> Self {
        let mut registry = Self {
            states: Vec::with_capacity(Level::COUNT * Position::COUNT),
        };
        registry.create_base_grid();
        registry
    }

    /// Insert one base state per `(level, position)`, levels outermost.
    ///
    /// Returns the number of states inserted; pairs already present are
    /// skipped.
    pub(crate) fn create_base_grid(&mut self) -> usize {
        self.add_variant_batch(Variant::BASE)
    }

    /// Insert a state, or return the existing one with the same triple.
    pub(crate) fn add_state(&mut self, key: StateKey) -> &State {
        let idx = match self.index_of(key) {
            Some(idx) => {
                tracing::debug!(state = %key, "add_state: already exists");
                idx
            }
            None => {
                tracing::trace!(state = %key, "add_state");
                self.states.push(State::new(key));
                self.states.len() - 1
            }
        };
        &self.states[idx]
    }

    /// Insert every missing `(level, position)` state for `variant`.
    pub(crate) fn add_variant_batch(&mut self, variant: Variant) -> usize {
        let mut added = 0;
        for level in Level::all() {
            for position in Position::all() {
                let key = StateKey::new(level, position, variant);
                if !self.contains(key) {
                    self.states.push(State::new(key));
                    added += 1;
                }
            }
        }
        tracing::trace!(%variant, added, "add_variant_batch");
        added
    }

    /// Remove an overlay state. Base states and unknown keys are refused.
    pub(crate) fn remove_state(&mut self, key: StateKey) -> Option<State> {
        if key.variant.is_base() {
            tracing::debug!(state = %key, "remove_state: base states are permanent");
            return None;
        }
        let Some(idx) = self.index_of(key) else {
            tracing::debug!(state = %key, "remove_state: unknown state");
            return None;
        };
        Some(self.states.remove(idx))
    }

    /// Merge bird attributes into an existing state.
    pub(crate) fn update_state(&mut self, key: StateKey, patch: &StatePatch) -> bool {
        match self.states.iter_mut().find(|s| s.key() == key) {
            Some(state) => {
                patch.apply(state);
                true
            }
            None => {
                tracing::debug!(state = %key, "update_state: unknown state");
                false
            }
        }
    }

    fn index_of(&self, key: StateKey) -> Option<usize> {
        self.states.iter().position(|s| s.key() == key)
    }

    /// Lookup by identity.
    pub fn get(&self, key: StateKey) -> Option<&State> {
        self.states.iter().find(|s| s.key() == key)
    }

    /// `true` if a state with this triple exists.
    pub fn contains(&self, key: StateKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Lookup by short label (`L2P15`, `ζL2P15`).
    pub fn find_by_short_label(&self, label: &str) -> Option<&State> {
        let key = StateKey::parse_short_label(label).ok()?;
        self.get(key)
    }

    /// All states in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// States of one variant, in insertion order.
    pub fn by_variant(&self, variant: Variant) -> impl Iterator<Item = &State> {
        self.states.iter().filter(move |s| s.variant() == variant)
    }

    /// States whose bird is visible.
    pub fn with_bird(&self) -> impl Iterator<Item = &State> {
        self.states.iter().filter(|s| s.has_bird())
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true in practice: the base grid is permanent.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/registry.rs"]
mod tests;
