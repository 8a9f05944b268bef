//! # appdelivery
//!
//! Composition root: tracing and config bootstrap, adapter wiring, the
//! watch-channel view-state adapter and the command-line driver.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
