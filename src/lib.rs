//! Entity simulation and collision/spawn engine for a 2D asteroid shooter.
//!
//! The library is renderer-agnostic: it consumes screen bounds, visual sizes
//! and directional intent flags, and produces new `GameState` values that a
//! presentation layer reads.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod movement;
pub mod replenish;
pub mod rng;
