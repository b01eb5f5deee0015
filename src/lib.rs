//! Shopping List - list editing core
//!
//! Shopping lists with weighed, measured and counted items, and the state
//! machine that drives the screen for creating and editing them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
