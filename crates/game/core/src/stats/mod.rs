//! Stat resolution.
//!
//! # Pipeline
//!
//! ```text
//! [ StatProfile: base block + curse/level category selections ]
//!      ↓  curse Boost
//!      ↓  level Boost
//! [ ModifierSet: passives folded in pickup order ]
//!      ↓  clamp resistances
//! [ effective AttributeBlock ]
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: resolution reads its inputs and returns a new block
//! 2. **Selective**: a boost only touches the categories it selects
//! 3. **Ordered**: categories iterate in declaration order, modifiers in
//!    insertion order
//!
//! Player-side bookkeeping that feeds the pressure scalars (experience and
//! level) lives in [`progression`]; aggregation over all participants in
//! [`pressure`].

pub mod actor;
pub mod attributes;
pub mod boost;
pub mod category;
pub mod error;
pub mod modifiers;
pub mod pressure;
pub mod progression;
pub mod resolve;

pub use actor::StatProfile;
pub use attributes::{Attribute, AttributeBlock, Resistances};
pub use boost::Boost;
pub use category::{CategorySet, StatCategory};
pub use error::StatError;
pub use modifiers::{CombineRule, Modifier, ModifierSet, SourceId};
pub use pressure::{Participant, cumulative_curse, cumulative_level};
pub use progression::{LevelRange, Progression};
pub use resolve::{resolve, try_resolve, validate_factor};
