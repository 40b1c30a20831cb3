//! Session domain module.
//!
//! This module contains the screen state machine, debate message types, and
//! the read-only views that screens render from. The mutable session itself is
//! owned by the controller in `marcus-application`.
//!
//! # Module Structure
//!
//! - `screen`: Screens and the transition table (`Screen`, `ScreenEvent`)
//! - `message`: Debate messages (`ChatMessage`, `MessageRole`)
//! - `model`: Snapshots (`SessionSnapshot`, `DebateSnapshot`)
//! - `context`: Situation and debate context rendering

mod context;
mod message;
mod model;
mod screen;

pub use context::{debate_context, situation_context};
pub use message::{ChatMessage, MessageRole};
pub use model::{DebateSnapshot, SessionSnapshot};
pub use screen::{Screen, ScreenEvent};
