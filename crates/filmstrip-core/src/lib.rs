#![forbid(unsafe_code)]

//! Shared geometry primitives for the filmstrip layout engine.

pub mod geometry;

pub use geometry::{AspectRatio, Size};
