//! # Quest Rules
//!
//! The rules and state-transition engine behind Questline. A player accrues
//! slow-moving traits, is offered a few small real-world quests, and time passing
//! never costs them anything.
//!
//! ## Core Components
//!
//! - **character**: stats, flags, and the immutable character state
//! - **time**: coarse time ranges (`recent`, `gap`, `long_gap`)
//! - **events**: the closed set of outcome records transitions emit
//! - **transitions**: pure functions for ticks, quest starts, and completions
//! - **quests**: quest definitions, the catalog interface, and load-time validation
//! - **rules**: filter → rank → select pipeline for surfacing quests
//! - **engine**: façade tying the catalog, transitions, and rules together
//! - **snapshot**: the persisted record exchanged with storage
//!
//! ## Design Philosophy
//!
//! - **Pure**: every transition takes a state and returns a new one plus events
//! - **Stagnation, not decay**: inactivity pauses growth and never lowers a stat
//! - **Quiet failure**: unknown quest ids are a no-op, not an error

pub mod character;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod quests;
pub mod rules;
pub mod snapshot;
pub mod time;
pub mod transitions;

pub use character::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use quests::*;
pub use rules::*;
pub use snapshot::*;
pub use time::*;
pub use transitions::*;
