//! Roofvogel is the authoring model and CSS compiler behind a scriptless
//! "bird" mechanic.
//!
//! A page holds three hidden radio groups (level, position, variant). Which
//! three radios are checked selects one state of a three-axis table, and the
//! compiled stylesheet decides, per state, whether and where a bird sprite
//! appears on the board grid.
//!
//! # Pipeline overview
//!
//! 1. **Author**: mutate a [`StateMachine`] through its command set (or replay
//!    a [`ModelDocument`]).
//! 2. **Classify**: every transition is tagged with the [`Axis`] it changes.
//! 3. **Compile**: [`compile`] projects the model into stylesheet text.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No failing mutations**: refused edits are no-ops; errors only arise
//!   while validating raw input.
//! - **Deterministic output**: the same model always compiles to the same bytes.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod classify;
mod compile;
mod document;
mod foundation;
mod model;

/// Standalone walkthrough of the model and the generated stylesheet.
pub mod guide;

pub use classify::axis::{Axis, AxisStyle, classify, classify_keys};
pub use compile::css::{CompileSummary, compile};
pub use compile::fingerprint::{CssFingerprint, fingerprint_css};
pub use document::{BirdDoc, ModelDocument, StateDoc, TransitionDoc, TransitionRefDoc};
pub use foundation::coords::{Level, Position, Variant, is_valid_triple};
pub use foundation::error::{RoofvogelError, RoofvogelResult};
pub use model::machine::StateMachine;
pub use model::registry::StateRegistry;
pub use model::state::{BirdMode, State, StateKey, StatePatch};
pub use model::transition::{Transition, TransitionId, TransitionSet};
