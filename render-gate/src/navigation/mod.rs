//! Implementation of the camera controls.
use nalgebra::{Matrix4, Vector2};

pub mod orbit_navigation;

/// The Navigation is responsible for implementing the camera controls of the gate.
///
/// It gets passed the camera commands issued by the host, and controls the camera
/// (view matrix and projection matrix) accordingly.
pub trait Navigation {
    /// Gets called, when the window size changes.
    fn on_window_resized(&mut self, w: f64, h: f64);

    /// Orbits around the focus point, by the given angles (in degrees).
    fn rotate(&mut self, dx: f64, dy: f64);

    /// Moves the focus point parallel to the view plane, by the given amount of world units.
    fn pan(&mut self, dx: f64, dy: f64);

    /// Moves the camera closer to (positive d) or further away from (negative d) the focus point.
    fn zoom(&mut self, d: f64);

    /// Gets called each frame before the rendering starts.
    /// The matrices, that are returned by [Self::update] are used during rendering.
    fn update(&mut self) -> Matrices;
}

/// Matrices, that define the camera behavior.
///
/// The **view matrix** transforms (homogeneous) coordinates from world space into camera space.
///
/// World space is a right-handed coordinate system. It is oriented, such that the xy-plane is
/// the "floor" and the z axis points into the sky.
///
/// The **projection matrix** then transforms the coordinates in camera space to clip space,
/// as defined by OpenGL: clip space ranges from -1.0 to 1.0 for any of the three axes.
///
/// Finally, the **window size** is the last bit of information that is needed, to map from
/// clip space to the actual on-screen pixel coordinates:
///  `x = (clip_x + 1.0) / 2.0 * window_size.x` and
///  `y = (clip_y + 1.0) / 2.0 * window_size.y`
#[derive(Clone, PartialEq, Debug)]
pub struct Matrices {
    pub view_matrix: Matrix4<f64>,
    pub projection_matrix: Matrix4<f64>,
    pub view_matrix_inv: Matrix4<f64>,
    pub projection_matrix_inv: Matrix4<f64>,
    pub window_size: Vector2<f64>,
}
