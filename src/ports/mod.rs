//! Ports (trait boundaries) between the game core and its drivers.

pub mod observer;
pub mod strategy;

pub use observer::MatchObserver;
pub use strategy::Strategy;
