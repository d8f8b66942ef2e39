//! Platform-neutral presentation layer
//!
//! The simulation never draws. Each frame the host asks [`scene::build_scene`]
//! for a flat, back-to-front list of primitives and rasterizes them with
//! whatever backend it has. Everything here is a pure function of game state,
//! theme, and settings.

pub mod scene;

pub use scene::{Scene, Sprite, Tint, build_scene};
