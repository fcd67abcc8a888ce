use std::fmt;

use crate::{
    classify::axis::{Axis, classify},
    model::registry::StateRegistry,
    model::state::StateKey,
};

/// Identity of a transition: the ordered pair of endpoint keys.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TransitionId {
    /// Source state.
    pub from: StateKey,
    /// Target state.
    pub to: StateKey,
}

impl TransitionId {
    /// Build an id from its endpoints.
    pub fn new(from: StateKey, to: StateKey) -> Self {
        Self { from, to }
    }

    /// `true` if either endpoint is `key`.
    pub fn touches(&self, key: StateKey) -> bool {
        self.from == key || self.to == key
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

/// A directed, classified edge between two existing states.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    id: TransitionId,
    axis: Axis,
    label: String,
}

impl Transition {
    /// Edge identity.
    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// Source state key.
    pub fn from(&self) -> StateKey {
        self.id.from
    }

    /// Target state key.
    pub fn to(&self) -> StateKey {
        self.id.to
    }

    /// Axis computed when the edge was created.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Display label; the axis icon unless one was supplied.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Insertion-ordered set of transitions, at most one per ordered pair.
///
/// Endpoints are keys into a [`StateRegistry`]; the set never outlives a
/// state because [`crate::StateMachine`] prunes it on every state removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionSet {
    transitions: Vec<Transition>,
}

impl TransitionSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `from → to`, classifying it against `states`.
    ///
    /// Refused (returns `None`) for self-edges, unknown endpoints and
    /// duplicate ordered pairs. An empty label falls back to the axis icon.
    pub(crate) fn add_transition(
        &mut self,
        states: &StateRegistry,
        from: StateKey,
        to: StateKey,
        label: Option<&str>,
    ) -> Option<&Transition> {
        let id = TransitionId::new(from, to);
        if from == to {
            tracing::debug!(transition = %id, "add_transition: self-edge refused");
            return None;
        }
        if self.contains(id) {
            tracing::debug!(transition = %id, "add_transition: already exists");
            return None;
        }
        let (Some(a), Some(b)) = (states.get(from), states.get(to)) else {
            tracing::debug!(transition = %id, "add_transition: unknown endpoint");
            return None;
        };

        let axis = classify(a, b);
        let label = label
            .filter(|l| !l.is_empty())
            .unwrap_or(axis.icon())
            .to_string();
        tracing::trace!(transition = %id, %axis, "add_transition");
        self.transitions.push(Transition { id, axis, label });
        self.transitions.last()
    }

    /// Remove an edge if present.
    pub(crate) fn remove_transition(&mut self, id: TransitionId) -> Option<Transition> {
        let idx = self.transitions.iter().position(|t| t.id == id)?;
        Some(self.transitions.remove(idx))
    }

    /// Drop every edge touching `key`. Returns the number removed.
    pub(crate) fn cascade_on_state_removal(&mut self, key: StateKey) -> usize {
        let before = self.transitions.len();
        self.transitions.retain(|t| !t.id.touches(key));
        let removed = before - self.transitions.len();
        if removed > 0 {
            tracing::trace!(state = %key, removed, "cascade_on_state_removal");
        }
        removed
    }

    /// Lookup by identity.
    pub fn get(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }

    /// `true` if the ordered pair already has an edge.
    pub fn contains(&self, id: TransitionId) -> bool {
        self.get(id).is_some()
    }

    /// All edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    /// Edges leaving `key`.
    pub fn outgoing(&self, key: StateKey) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.id.from == key)
    }

    /// Edges entering `key`.
    pub fn incoming(&self, key: StateKey) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.id.to == key)
    }

    /// Edges with `key` at either end.
    pub fn touching(&self, key: StateKey) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.id.touches(key))
    }

    /// Edges classified as `axis`.
    pub fn by_axis(&self, axis: Axis) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.axis == axis)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// `true` when there are no edges.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/transition.rs"]
mod tests;
