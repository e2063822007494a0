//! Contains all render backends that implement the rendering gate.
//!
//! At the current state of development, the [glium] backend is the only available one.

pub mod glium;
