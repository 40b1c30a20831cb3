//! Use-case layer: the session controller and its debate sub-session.

pub mod debate;
pub mod retry;
pub mod session_controller;

pub use crate::debate::DebateSession;
pub use crate::retry::RetryPolicy;
pub use crate::session_controller::{
    AnalysisCompletion, PendingAnalysis, PendingTurn, SessionController, TurnCompletion,
};
