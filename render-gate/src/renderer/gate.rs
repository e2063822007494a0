//! The interface, through which a host application drives the rendering gate.
//!
//! The host owns the window and the frame loop. Each frame it forwards input to the camera
//! controls, notifies the gate about a changed framebuffer size and finally asks the gate to
//! render (and present) one frame. Everything else - camera math, scene content, draw calls -
//! stays behind this interface.

use crate::renderer::error::GateResult;

/// Identifies a camera of the gate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CameraId(usize);

/// Identifies a debug object in the scene of the gate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjectId(usize);

impl CameraId {
    pub fn begin() -> Self {
        CameraId(0)
    }

    pub fn next(&mut self) -> Self {
        self.0 += 1;
        *self
    }
}

impl ObjectId {
    pub fn begin() -> Self {
        ObjectId(0)
    }

    pub fn next(&mut self) -> Self {
        self.0 += 1;
        *self
    }
}

/// Camera controls of the rendering gate.
pub trait CameraControl {
    /// The camera that is used for rendering the main view.
    fn default_camera(&self) -> CameraId;

    /// Orbits the camera around the point it looks at.
    /// Both angles are given in degrees.
    fn rotate(&mut self, camera: CameraId, dx: f32, dy: f32) -> GateResult<()>;

    /// Moves the point the camera looks at parallel to the view plane.
    /// The offsets are given in world units, positive `dx` moves the scene to the right and
    /// positive `dy` moves the scene down (window coordinates).
    fn move_camera(&mut self, camera: CameraId, dx: f32, dy: f32) -> GateResult<()>;

    /// Moves the camera towards (positive amount) or away from (negative amount) the point it
    /// looks at.
    fn zoom(&mut self, camera: CameraId, amount: f32) -> GateResult<()>;
}

/// Lifecycle, scene and debug controls of the rendering gate.
///
/// Initialization is done by the constructor of the respective backend.
pub trait RenderGate: CameraControl {
    /// Gets called, when the size of the framebuffer changes.
    /// A size of zero (e.g. for a minimized window) is ignored.
    fn resize_view(&mut self, width: u32, height: u32);

    /// Draws the scene and the GUI overlay and presents the finished frame.
    fn render_once(&mut self) -> GateResult<()>;

    /// Shows or hides the debug objects.
    fn toggle_debug(&mut self);

    /// Whether the debug objects are currently shown.
    fn is_debug_visible(&self) -> bool;

    /// The debug object, that is always present in the scene.
    fn debug_default_object(&self) -> ObjectId;

    /// Changes the color of a debug object. The components are clamped to `0.0..=1.0`.
    fn debug_update_object_color(&mut self, object: ObjectId, r: f32, g: f32, b: f32)
        -> GateResult<()>;

    /// Releases all GPU resources.
    /// Calling this more than once has no further effect.
    fn finalize(&mut self);
}
