//! # Roofvogel guide
//!
//! A short end-to-end tour of the model and of the stylesheet it compiles to.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Level`](crate::Level) (`0..=4`), [`Position`](crate::Position) (`13..=18`) and
//!   [`Variant`](crate::Variant) (`normaal`, `ζ`, `η`) span the coordinate space.
//! - A [`State`](crate::State) is identified by its [`StateKey`](crate::StateKey) triple and
//!   optionally carries a bird placement.
//! - A [`Transition`](crate::Transition) links two states and is tagged with the
//!   [`Axis`](crate::Axis) it changes.
//! - [`StateMachine`](crate::StateMachine) owns both sets and is the only way to mutate them.
//!
//! ## Lifecycle
//!
//! A new model already holds the 30 `normaal` states. They are permanent. Overlay states are
//! added one at a time or as a full batch, and removing one also removes every transition
//! that touches it:
//!
//! ```
//! use roofvogel::{Level, Position, StateKey, StateMachine, Variant};
//!
//! let mut m = StateMachine::new();
//! m.add_variant_batch(Variant::Zeta);
//!
//! let base = StateKey::parse_short_label("L2P15")?;
//! let zeta = StateKey::parse_short_label("ζL2P15")?;
//! m.add_transition(base, zeta, None);
//! assert_eq!(m.transitions().len(), 1);
//!
//! assert!(m.remove_state(zeta));
//! assert!(m.transitions().is_empty());
//! assert!(!m.remove_state(base));
//! # Ok::<(), roofvogel::RoofvogelError>(())
//! ```
//!
//! ## Classification
//!
//! [`classify`](crate::classify) checks level, then position, then variant and reports the
//! first difference. An edge that changes level and position at once is a `level` edge.
//!
//! ## The stylesheet
//!
//! [`compile`](crate::compile) emits, in order:
//!
//! 1. a header comment with state, bird-state and transition counts
//! 2. rules hiding the three radio groups and the bird
//! 3. one rule per state whose bird has both coordinates set
//! 4. a comment pair per `variant` transition (documentation only)
//! 5. the `@keyframes bird-grab` block
//!
//! A rule selects on the state's own radios and places the bird on the grid cell
//! `(column = bird position - 12, row = 5 - bird level)`:
//!
//! ```
//! use roofvogel::{Level, Position, StateKey, StateMachine, StatePatch};
//!
//! let mut m = StateMachine::new();
//! let key = StateKey::parse_short_label("L2P15")?;
//! m.update_state(key, &StatePatch::bird_at(Level::new(3)?, Position::new(17)?));
//!
//! let css = m.compile_css();
//! assert!(css.contains("#level-2:checked ~ #pos-15:checked ~ #var-normaal:checked ~ .game-board .bird {"));
//! assert!(css.contains("  grid-column: 5;\n  grid-row: 2;\n"));
//! # Ok::<(), roofvogel::RoofvogelError>(())
//! ```
//!
//! Only `grabbing` birds are animated. `attacking` currently renders exactly like `flying`.
