//! The debug panel of the GUI overlay.

use crate::frame_stats::FrameStats;
use crate::ros::CloudInbox;
use log::debug;
use render_gate::egui;
use render_gate::renderer::error::GateResult;
use render_gate::renderer::gate::RenderGate;

pub const PANEL_TITLE: &str = "PointCloud2 viewer";

/// Something the user asked for in the panel, to be forwarded to the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    ToggleDebug,
    ObjectColor([f32; 3]),
}

#[derive(Debug)]
pub struct DebugPanel {
    cube_color: [f32; 3],
    show_debug: bool,
}

impl DebugPanel {
    pub fn new() -> Self {
        DebugPanel {
            cube_color: [1.0, 1.0, 1.0],
            show_debug: false,
        }
    }

    /// Builds the panel. The returned actions still need to be [applied](Self::apply).
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        stats: &FrameStats,
        inbox: &CloudInbox,
    ) -> Vec<PanelAction> {
        let mut actions = Vec::new();
        egui::Window::new(PANEL_TITLE).show(ctx, |ui| {
            #[cfg(feature = "debug-ui")]
            {
                if ui.button("Toggle debug").clicked() {
                    actions.push(self.toggle_debug());
                }
                if self.show_debug {
                    ui.horizontal(|ui| {
                        if ui.color_edit_button_rgb(&mut self.cube_color).changed() {
                            actions.push(PanelAction::ObjectColor(self.cube_color));
                        }
                        ui.label("cube color");
                    });
                }
            }

            ui.label(format!(
                "Application average {:.3} ms/frame ({:.1} FPS)",
                stats.ms_per_frame(),
                stats.framerate()
            ));

            ui.label(format!("Point clouds received: {}", inbox.nr_received()));
            if let Some(latest) = inbox.latest() {
                ui.label(format!(
                    "Latest: frame `{}`, {} points, {:.3} s",
                    latest.frame_id,
                    latest.nr_points(),
                    latest.time_stamp.as_secs_f64()
                ));
            }
        });
        actions
    }

    #[cfg_attr(not(feature = "debug-ui"), allow(dead_code))]
    fn toggle_debug(&mut self) -> PanelAction {
        self.show_debug = !self.show_debug;
        PanelAction::ToggleDebug
    }

    #[cfg(test)]
    pub fn is_debug_shown(&self) -> bool {
        self.show_debug
    }

    /// Forwards the actions to the gate.
    pub fn apply<G: RenderGate>(&self, actions: &[PanelAction], gate: &mut G) -> GateResult<()> {
        for action in actions {
            debug!("Panel: {:?}", action);
            match *action {
                PanelAction::ToggleDebug => gate.toggle_debug(),
                PanelAction::ObjectColor([r, g, b]) => {
                    let object = gate.debug_default_object();
                    gate.debug_update_object_color(object, r, g, b)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for DebugPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{DebugPanel, PanelAction};
    use render_gate::renderer::error::{GateError, GateResult};
    use render_gate::renderer::gate::{CameraControl, CameraId, ObjectId, RenderGate};

    #[derive(Default)]
    struct FakeGate {
        debug_visible: bool,
        color: Option<[f32; 3]>,
    }

    impl CameraControl for FakeGate {
        fn default_camera(&self) -> CameraId {
            CameraId::begin()
        }

        fn rotate(&mut self, _: CameraId, _: f32, _: f32) -> GateResult<()> {
            Ok(())
        }

        fn move_camera(&mut self, _: CameraId, _: f32, _: f32) -> GateResult<()> {
            Ok(())
        }

        fn zoom(&mut self, _: CameraId, _: f32) -> GateResult<()> {
            Ok(())
        }
    }

    impl RenderGate for FakeGate {
        fn resize_view(&mut self, _: u32, _: u32) {}

        fn render_once(&mut self) -> GateResult<()> {
            Ok(())
        }

        fn toggle_debug(&mut self) {
            self.debug_visible = !self.debug_visible;
        }

        fn is_debug_visible(&self) -> bool {
            self.debug_visible
        }

        fn debug_default_object(&self) -> ObjectId {
            ObjectId::begin().next()
        }

        fn debug_update_object_color(
            &mut self,
            object: ObjectId,
            r: f32,
            g: f32,
            b: f32,
        ) -> GateResult<()> {
            if object != self.debug_default_object() {
                return Err(GateError::ObjectDoesNotExist { id: object });
            }
            self.color = Some([r, g, b]);
            Ok(())
        }

        fn finalize(&mut self) {}
    }

    #[test]
    fn test_actions_reach_the_gate() {
        let panel = DebugPanel::new();
        let mut gate = FakeGate::default();
        panel
            .apply(
                &[
                    PanelAction::ToggleDebug,
                    PanelAction::ObjectColor([0.5, 0.25, 1.0]),
                ],
                &mut gate,
            )
            .unwrap();
        assert!(gate.is_debug_visible());
        assert_eq!(gate.color, Some([0.5, 0.25, 1.0]));

        panel.apply(&[PanelAction::ToggleDebug], &mut gate).unwrap();
        assert!(!gate.is_debug_visible());
    }

    #[test]
    fn test_toggle_flips_panel_state() {
        let mut panel = DebugPanel::new();
        assert!(!panel.is_debug_shown());
        assert_eq!(panel.toggle_debug(), PanelAction::ToggleDebug);
        assert!(panel.is_debug_shown());
        panel.toggle_debug();
        assert!(!panel.is_debug_shown());
    }
}
