//! This crate provides the rendering gate of the point cloud viewer: a small 3D engine that owns
//! the camera, the debug scene and the GUI overlay, and is driven frame by frame by its host.

pub mod navigation;
pub mod renderer;

pub use egui;
pub use glium;
