//! Adapters for the Committee subsystem

pub mod clock;

pub use clock::ManualClock;
