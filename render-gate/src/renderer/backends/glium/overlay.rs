//! Immediate mode GUI, that is drawn on top of the scene.

use egui_glium::EguiGlium;
use glium::glutin::event::WindowEvent;
use glium::glutin::event_loop::EventLoopWindowTarget;
use glium::{Display, Frame};

pub struct Overlay {
    egui: EguiGlium,
}

impl Overlay {
    pub fn new<E>(display: &Display, event_loop: &EventLoopWindowTarget<E>) -> Self {
        Overlay {
            egui: EguiGlium::new(display, event_loop),
        }
    }

    /// Feeds a window event to the GUI.
    /// Returns true, if the GUI wants exclusive use of this event.
    pub fn on_event(&mut self, event: &WindowEvent<'_>) -> bool {
        self.egui.on_event(event)
    }

    /// True, while the pointer is interacting with (or hovering over) one of the GUI windows.
    pub fn has_focus(&self) -> bool {
        self.egui.egui_ctx.wants_pointer_input()
    }

    /// Builds the GUI for the next frame.
    pub fn new_frame(&mut self, display: &Display, run_ui: impl FnMut(&egui::Context)) {
        self.egui.run(display, run_ui);
    }

    /// Paints the GUI, that was built by the last call to [Self::new_frame].
    pub fn paint(&mut self, display: &Display, frame: &mut Frame) {
        self.egui.paint(display, frame);
    }
}
