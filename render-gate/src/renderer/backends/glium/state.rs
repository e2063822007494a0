//! Gate state, that does not depend on the GL context.

use crate::navigation::orbit_navigation::OrbitNavigation;
use crate::navigation::{Matrices, Navigation};
use crate::renderer::error::{GateError, GateResult};
use crate::renderer::gate::{CameraControl, CameraId, ObjectId};
use crate::renderer::settings::Color;
use log::{debug, trace};
use std::collections::HashMap;

/// Cameras and debug objects of the gate.
pub struct GateState {
    cameras: HashMap<CameraId, OrbitNavigation>,
    default_camera: CameraId,
    debug_objects: HashMap<ObjectId, Color>,
    default_debug_object: ObjectId,
    show_debug: bool,
}

impl GateState {
    pub fn new() -> Self {
        let default_camera = CameraId::begin().next();
        let mut cameras = HashMap::new();
        cameras.insert(default_camera, OrbitNavigation::new());

        let default_debug_object = ObjectId::begin().next();
        let mut debug_objects = HashMap::new();
        debug_objects.insert(default_debug_object, Color::WHITE);

        GateState {
            cameras,
            default_camera,
            debug_objects,
            default_debug_object,
            show_debug: false,
        }
    }

    fn camera_mut(&mut self, camera: CameraId) -> GateResult<&mut OrbitNavigation> {
        self.cameras
            .get_mut(&camera)
            .ok_or(GateError::CameraDoesNotExist { id: camera })
    }

    /// Recalculates the matrices of the default camera.
    pub fn default_camera_matrices(&mut self) -> GateResult<Matrices> {
        let camera = self.default_camera;
        Ok(self.camera_mut(camera)?.update())
    }

    /// Zero sizes (minimized window) are ignored.
    /// Returns true, if the cameras were updated.
    pub fn resize_view(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            trace!("Ignoring view size {}x{}", width, height);
            return false;
        }
        for navigation in self.cameras.values_mut() {
            navigation.on_window_resized(width as f64, height as f64);
        }
        debug!("View resized to {}x{}", width, height);
        true
    }

    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
        debug!("Debug objects visible: {}", self.show_debug);
    }

    pub fn is_debug_visible(&self) -> bool {
        self.show_debug
    }

    pub fn debug_default_object(&self) -> ObjectId {
        self.default_debug_object
    }

    pub fn debug_update_object_color(&mut self, object: ObjectId, color: Color) -> GateResult<()> {
        let entry = self
            .debug_objects
            .get_mut(&object)
            .ok_or(GateError::ObjectDoesNotExist { id: object })?;
        *entry = color.clamped();
        Ok(())
    }

    /// Color of the debug cube, if debug objects are visible.
    pub fn visible_debug_color(&self) -> Option<Color> {
        if !self.show_debug {
            return None;
        }
        self.debug_objects.get(&self.default_debug_object).copied()
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraControl for GateState {
    fn default_camera(&self) -> CameraId {
        self.default_camera
    }

    fn rotate(&mut self, camera: CameraId, dx: f32, dy: f32) -> GateResult<()> {
        self.camera_mut(camera)?.rotate(dx as f64, dy as f64);
        Ok(())
    }

    fn move_camera(&mut self, camera: CameraId, dx: f32, dy: f32) -> GateResult<()> {
        self.camera_mut(camera)?.pan(dx as f64, dy as f64);
        Ok(())
    }

    fn zoom(&mut self, camera: CameraId, amount: f32) -> GateResult<()> {
        self.camera_mut(camera)?.zoom(amount as f64);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::GateState;
    use crate::renderer::error::GateError;
    use crate::renderer::gate::{CameraControl, CameraId, ObjectId};
    use crate::renderer::settings::Color;
    use nalgebra::Vector2;

    #[test]
    fn test_zero_sizes_are_ignored() {
        let mut state = GateState::new();
        assert!(state.resize_view(640, 480));
        assert!(!state.resize_view(0, 480));
        assert!(!state.resize_view(640, 0));
        let matrices = state.default_camera_matrices().unwrap();
        assert_eq!(matrices.window_size, Vector2::new(640.0, 480.0));
    }

    #[test]
    fn test_unknown_camera() {
        let mut state = GateState::new();
        let unknown = CameraId::begin();
        assert_ne!(unknown, state.default_camera());
        assert!(matches!(
            state.rotate(unknown, 1.0, 1.0),
            Err(GateError::CameraDoesNotExist { id }) if id == unknown
        ));
        assert!(matches!(
            state.move_camera(unknown, 1.0, 1.0),
            Err(GateError::CameraDoesNotExist { .. })
        ));
        assert!(matches!(
            state.zoom(unknown, 1.0),
            Err(GateError::CameraDoesNotExist { .. })
        ));

        let camera = state.default_camera();
        state.rotate(camera, 1.0, 1.0).unwrap();
        state.move_camera(camera, 1.0, 1.0).unwrap();
        state.zoom(camera, 1.0).unwrap();
    }

    #[test]
    fn test_unknown_object() {
        let mut state = GateState::new();
        let unknown = ObjectId::begin();
        assert_ne!(unknown, state.debug_default_object());
        assert!(matches!(
            state.debug_update_object_color(unknown, Color::BLACK),
            Err(GateError::ObjectDoesNotExist { id }) if id == unknown
        ));
    }

    #[test]
    fn test_debug_color_clamped_and_hidden_by_default() {
        let mut state = GateState::new();
        let object = state.debug_default_object();
        state
            .debug_update_object_color(object, Color::rgb(2.0, 0.5, -1.0))
            .unwrap();
        assert_eq!(state.visible_debug_color(), None);

        state.toggle_debug();
        assert!(state.is_debug_visible());
        assert_eq!(state.visible_debug_color(), Some(Color::rgb(1.0, 0.5, 0.0)));
    }
}
