//! Dino Run: a terminal side-scroller where a dinosaur jumps over trees.
//!
//! The simulation (`compute`) is pure and deterministic given an RNG; the
//! `session` module drives it through a [`session::Frontend`], which the
//! binary implements on top of crossterm.

pub mod assets;
pub mod clock;
pub mod compute;
pub mod config;
pub mod constants;
pub mod display;
pub mod entities;
pub mod session;
