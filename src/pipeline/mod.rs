//! Automated play against the engine
//!
//! This module provides:
//! - Strategies that stand in for the human player
//! - A match runner playing many sessions with observers attached
//! - Exhaustive verification that the engine never loses

pub mod match_runner;
pub mod observers;
pub mod strategies;
pub mod verify;

pub use match_runner::{MatchConfig, MatchRunner, MatchSummary};
pub use observers::{ProgressObserver, TracingObserver};
pub use strategies::{FirstEmptyStrategy, MinimaxStrategy, RandomStrategy};
pub use verify::{VerificationReport, verify_from, verify_never_loses};

pub use crate::ports::{MatchObserver, Strategy};
