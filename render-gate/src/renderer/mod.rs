//! Contains everything related to drawing a frame.
//!
//! The renderer is split into two parts: The [gate] module defines the interface that the host
//! application talks to, while a render backend is doing the actual heavylifting.

pub mod backends;
pub mod error;
pub mod gate;
pub mod settings;
