//! Chaos-game point generation for the **Sierpinski gasket**, plus the small
//! fixed-size vector math it is built on.
//!
//! This crate is deliberately free of GPU and windowing dependencies so it
//! can be consumed by tests and tooling without pulling in a renderer. The
//! viewer binary feeds the generated buffer straight to a vertex buffer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`math`] | `Vec2`, `Vec3`, `Vec4`, `ParseVecError` |
//! | [`chaos`] | `Triangle`, `ChaosGame`, `VertexPicker`, `UniformPicker` |
//!
//! # Quick start
//!
//! ```rust
//! use gasket_core::chaos::{ChaosGame, UniformPicker};
//!
//! let game = ChaosGame::default();
//! let points = game.generate(&mut UniformPicker::seeded(7));
//!
//! assert_eq!(points.len(), 20_000);
//! ```

pub mod chaos;
pub mod math;

pub use chaos::{ChaosGame, Triangle, UniformPicker, VertexPicker};
pub use math::{Vec2, Vec3, Vec4};
