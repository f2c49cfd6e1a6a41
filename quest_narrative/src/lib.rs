//! # Quest Narrative
//!
//! Turns the events emitted by `quest_rules` into one short line of text a
//! player sees after acting, or after coming back.
//!
//! ## Core Components
//!
//! - **summary**: the rendered summary, its tone, and length caps
//! - **summarizer**: event priority and the closed template table
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: the same events and state always produce the same text
//! - **Closed vocabulary**: every line comes from a fixed template, nothing is free-form
//! - **Never scolding**: absence is acknowledged calmly, never counted against the player

pub mod summarizer;
pub mod summary;

pub use summarizer::*;
pub use summary::*;
