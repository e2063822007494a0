//! Render backend based on the `glium` crate.
mod draw_debug_cube;
mod draw_grid;
mod overlay;
mod shaders;
mod state;
mod util;

use crate::renderer::backends::glium::draw_debug_cube::DebugCubeRenderer;
use crate::renderer::backends::glium::draw_grid::GridRenderer;
use crate::renderer::backends::glium::overlay::Overlay;
use crate::renderer::backends::glium::state::GateState;
use crate::renderer::error::{GateError, GateResult};
use crate::renderer::gate::{CameraControl, CameraId, ObjectId, RenderGate};
use crate::renderer::settings::{Color, GateConfig};
use glium::glutin::event::WindowEvent;
use glium::glutin::event_loop::EventLoopWindowTarget;
use glium::{Display, Surface};
use log::{debug, log, trace};
use std::time::{Duration, Instant};

/// Everything that lives on the GPU or needs the GL context.
struct Resources {
    display: Display,
    grid: Option<GridRenderer>,
    debug_cube: DebugCubeRenderer,
    overlay: Overlay,
}

/// Rendering gate drawing into a glium [Display].
///
/// The display (window and GL context) is created by the host and handed over on
/// [initialization](Self::initialize). The gate only draws into it - swapping the buffers is
/// part of [RenderGate::render_once].
pub struct GliumGate {
    resources: Option<Resources>,
    state: GateState,
    bg_color: Color,
    frame_budget: Duration,
}

impl GliumGate {
    /// Initializes the gate.
    ///
    /// The event loop is needed by the GUI overlay (e.g. for clipboard access).
    pub fn initialize<E>(
        display: Display,
        event_loop: &EventLoopWindowTarget<E>,
        config: GateConfig,
    ) -> GateResult<Self> {
        let level = config.log_level;
        log!(level, "OpenGL version: {}", display.get_opengl_version_string());
        log!(level, "OpenGL vendor: {}", display.get_opengl_vendor_string());
        log!(level, "OpenGL renderer: {}", display.get_opengl_renderer_string());
        log!(level, "OpenGL profile: {:?}", display.get_opengl_profile());

        let grid = match &config.scene.grid {
            Some(grid_settings) => Some(GridRenderer::new(&display, grid_settings.to_owned())?),
            None => None,
        };
        let debug_cube = DebugCubeRenderer::new(&display, config.scene.debug_cube_size)?;
        let overlay = Overlay::new(&display, event_loop);

        let mut gate = GliumGate {
            resources: Some(Resources {
                display,
                grid,
                debug_cube,
                overlay,
            }),
            state: GateState::new(),
            bg_color: config.scene.bg_color,
            frame_budget: Duration::from_secs_f64(1.0 / config.fps.max(1) as f64),
        };
        gate.resize_view(config.view_width, config.view_height);
        debug!("Rendering gate initialized.");
        Ok(gate)
    }

    /// Feeds a window event to the GUI overlay.
    /// Returns true, if the GUI consumed the event.
    pub fn on_window_event(&mut self, event: &WindowEvent<'_>) -> bool {
        match &mut self.resources {
            Some(resources) => resources.overlay.on_event(event),
            None => false,
        }
    }

    /// True, while the GUI overlay holds the pointer focus.
    /// Camera input should be ignored then.
    pub fn overlay_has_focus(&self) -> bool {
        self.resources
            .as_ref()
            .map(|resources| resources.overlay.has_focus())
            .unwrap_or(false)
    }

    /// Builds the GUI overlay for the next frame.
    pub fn new_frame_overlay(&mut self, run_ui: impl FnMut(&egui::Context)) {
        if let Some(resources) = &mut self.resources {
            resources.overlay.new_frame(&resources.display, run_ui);
        }
    }
}

impl CameraControl for GliumGate {
    fn default_camera(&self) -> CameraId {
        self.state.default_camera()
    }

    fn rotate(&mut self, camera: CameraId, dx: f32, dy: f32) -> GateResult<()> {
        self.state.rotate(camera, dx, dy)
    }

    fn move_camera(&mut self, camera: CameraId, dx: f32, dy: f32) -> GateResult<()> {
        self.state.move_camera(camera, dx, dy)
    }

    fn zoom(&mut self, camera: CameraId, amount: f32) -> GateResult<()> {
        self.state.zoom(camera, amount)
    }
}

impl RenderGate for GliumGate {
    fn resize_view(&mut self, width: u32, height: u32) {
        self.state.resize_view(width, height);
    }

    fn render_once(&mut self) -> GateResult<()> {
        let time_start = Instant::now();
        let resources = self.resources.as_mut().ok_or(GateError::Finalized)?;
        let matrices = self.state.default_camera_matrices()?;
        let view_projection = matrices.projection_matrix * matrices.view_matrix;

        // draw background
        let mut frame = resources.display.draw();
        frame.clear_color_and_depth((self.bg_color.r, self.bg_color.g, self.bg_color.b, 1.0), 1.0);

        // draw scene
        let mut drawn = Ok(());
        if let Some(color) = self.state.visible_debug_color() {
            drawn = resources.debug_cube.draw(&mut frame, &view_projection, color);
        }
        if let Some(grid) = &resources.grid {
            drawn = drawn.and_then(|_| {
                grid.draw(&mut frame, &view_projection, &matrices.view_matrix_inv)
            });
        }

        // gui on top
        resources.overlay.paint(&resources.display, &mut frame);

        // the frame needs to be finished in any case
        let finished = frame.finish().map_err(GateError::graphics);
        drawn.and(finished)?;

        let time = Instant::now().duration_since(time_start);
        trace!("Frame rendered in {} ms", time.as_millis());
        if time > self.frame_budget {
            debug!(
                "Frame took {} ms, exceeding the budget of {} ms",
                time.as_millis(),
                self.frame_budget.as_millis()
            );
        }
        Ok(())
    }

    fn toggle_debug(&mut self) {
        self.state.toggle_debug();
    }

    fn is_debug_visible(&self) -> bool {
        self.state.is_debug_visible()
    }

    fn debug_default_object(&self) -> ObjectId {
        self.state.debug_default_object()
    }

    fn debug_update_object_color(
        &mut self,
        object: ObjectId,
        r: f32,
        g: f32,
        b: f32,
    ) -> GateResult<()> {
        self.state.debug_update_object_color(object, Color::rgb(r, g, b))
    }

    fn finalize(&mut self) {
        if self.resources.take().is_some() {
            debug!("Rendering gate finalized.");
        }
    }
}

impl Drop for GliumGate {
    fn drop(&mut self) {
        self.finalize();
    }
}

#[cfg(test)]
mod test {
    use super::GliumGate;
    use crate::renderer::backends::glium::state::GateState;
    use crate::renderer::error::GateError;
    use crate::renderer::gate::{CameraControl, RenderGate};
    use crate::renderer::settings::Color;
    use std::time::Duration;

    /// A gate, whose GPU resources are already released.
    fn finalized_gate() -> GliumGate {
        GliumGate {
            resources: None,
            state: GateState::new(),
            bg_color: Color::BLACK,
            frame_budget: Duration::from_millis(16),
        }
    }

    #[test]
    fn test_render_after_finalize_fails() {
        let mut gate = finalized_gate();
        assert!(matches!(gate.render_once(), Err(GateError::Finalized)));
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut gate = finalized_gate();
        gate.finalize();
        gate.finalize();
        assert!(matches!(gate.render_once(), Err(GateError::Finalized)));
        assert!(!gate.overlay_has_focus());
    }

    #[test]
    fn test_camera_control_without_resources() {
        let mut gate = finalized_gate();
        let camera = gate.default_camera();
        gate.rotate(camera, 10.0, 5.0).unwrap();
        gate.zoom(camera, 1.0).unwrap();
        gate.resize_view(0, 0);
        gate.toggle_debug();
        assert!(gate.is_debug_visible());
        let object = gate.debug_default_object();
        gate.debug_update_object_color(object, 0.1, 0.2, 0.3).unwrap();
    }
}
