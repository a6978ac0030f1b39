//! Flamegraph SVG interaction engine.
//!
//! This crate loads the interactive flamegraph SVG documents produced by
//! simpleperf's inferno reporter into strongly-typed Rust structures and
//! implements the viewer behavior over them: a per-view zoom history,
//! zoom-relative layout, label fitting, substring search and WASD keyboard
//! navigation.
//!
//! The binary `flameview` demonstrates usage and prints the parsed JSON.

pub mod model;
pub mod parser;
pub mod view;
