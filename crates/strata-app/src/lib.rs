//! # Strata App Library
//!
//! Wires the data-access and use-case layers together and runs a single
//! lookup through the chosen wiring.

pub mod app;
pub mod cli;
pub mod di;

pub use app::{run_lookup, LookupRequest, Wiring};
