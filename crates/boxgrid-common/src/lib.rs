//! Common utilities for the boxgrid layout engine.
//!
//! This crate provides shared infrastructure used by the style, layout and
//! paint components:
//! - **Warning System** - colored terminal output for unsupported features

pub mod warning;
