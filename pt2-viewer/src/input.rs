//! Maps mouse input to the camera controls of the rendering gate.

use render_gate::glium::glutin::dpi::PhysicalPosition;
use render_gate::glium::glutin::event::{ElementState, MouseButton, MouseScrollDelta};
use render_gate::renderer::error::GateResult;
use render_gate::renderer::gate::CameraControl;

/// Degrees of rotation per pixel of mouse movement.
const ROTATE_SPEED: f32 = 0.5;

/// World units of camera movement per pixel of mouse movement.
const MOVE_SPEED: f32 = 0.03;

/// Assume a line to be equivalent to 20 pixels.
const PIXELS_PER_LINE: f64 = 20.0;

/// State of the mouse, as far as the camera controls are concerned.
#[derive(Debug, Default)]
pub struct CameraInput {
    cursor: Option<PhysicalPosition<f64>>,
    left_pressed: bool,
    middle_pressed: bool,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button state is tracked regardless of GUI focus, so that a drag that started in the GUI
    /// does not leave a stuck button behind.
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.left_pressed = pressed,
            MouseButton::Middle => self.middle_pressed = pressed,
            _ => (),
        }
    }

    /// Rotates the camera while the left button is held, and moves it while the middle button is
    /// held. Nothing happens while the GUI has focus.
    pub fn on_cursor_moved<G: CameraControl>(
        &mut self,
        position: PhysicalPosition<f64>,
        ui_has_focus: bool,
        gate: &mut G,
    ) -> GateResult<()> {
        let previous = self.cursor.replace(position);
        let previous = match previous {
            Some(p) if !ui_has_focus => p,
            _ => return Ok(()),
        };
        let dx = (position.x - previous.x) as f32;
        let dy = (position.y - previous.y) as f32;

        let camera = gate.default_camera();
        if self.left_pressed {
            gate.rotate(camera, ROTATE_SPEED * dx, ROTATE_SPEED * dy)?;
        }
        if self.middle_pressed {
            gate.move_camera(camera, MOVE_SPEED * dx, MOVE_SPEED * dy)?;
        }
        Ok(())
    }

    /// Zooms the camera, unless the GUI has focus.
    pub fn on_scroll<G: CameraControl>(
        &mut self,
        delta: MouseScrollDelta,
        ui_has_focus: bool,
        gate: &mut G,
    ) -> GateResult<()> {
        if ui_has_focus {
            return Ok(());
        }
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, delta_y) => delta_y,
            MouseScrollDelta::PixelDelta(delta) => (delta.y / PIXELS_PER_LINE) as f32,
        };
        let camera = gate.default_camera();
        gate.zoom(camera, amount)
    }

    /// The next cursor position is not relative to the last known one.
    pub fn on_cursor_left(&mut self) {
        self.cursor = None;
    }
}
