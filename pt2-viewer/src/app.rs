//! The frame loop of the viewer.

use crate::cli::AppOptions;
use crate::frame_stats::FrameStats;
use crate::input::CameraInput;
use crate::panel::DebugPanel;
use crate::params::{RosParamServer, ViewerParams};
use crate::ros::{self, PointCloudSubscription};
use crate::shutdown::ShutdownRequest;
use crate::viewport::ViewportTracker;
use crate::window::{self, WindowOptions};
use anyhow::{Context, Result};
use log::{debug, info, trace};
use render_gate::glium::glutin::event::{Event, WindowEvent};
use render_gate::glium::glutin::event_loop::{ControlFlow, EventLoop};
use render_gate::glium::glutin::platform::run_return::EventLoopExtRunReturn;
use render_gate::renderer::backends::glium::GliumGate;
use render_gate::renderer::error::GateResult;
use render_gate::renderer::gate::RenderGate;
use render_gate::renderer::settings::GateConfig;
use std::time::Instant;

pub fn run(args: AppOptions) -> Result<()> {
    ros::init(&args.node_name)?;
    let mut shutdown = ShutdownRequest::install_ctrlc_handler()?;

    // Read params from launch file
    let params = ViewerParams::load(&RosParamServer)?;
    info!(
        "Window size: {}x{}, target frame rate: {} FPS",
        params.width, params.height, params.fps
    );
    let rate = rosrust::rate(params.fps as f64);

    let mut subscription =
        PointCloudSubscription::subscribe(&args.pointcloud_topic, args.queue_size)?;

    // window and GL context
    let mut event_loop = EventLoop::new();
    let display = window::create_display(
        &event_loop,
        &WindowOptions {
            title: &args.window_title,
            width: params.width,
            height: params.height,
            vsync: !args.no_vsync,
        },
    )?;

    let mut gate = GliumGate::initialize(
        display.clone(),
        &event_loop,
        GateConfig {
            log_level: log::Level::Info,
            view_width: params.width,
            view_height: params.height,
            fps: params.fps,
            ..GateConfig::default()
        },
    )
    .context("Failed to initialize the rendering gate")?;

    let mut input = CameraInput::new();
    let (width, height) = display.get_framebuffer_dimensions();
    let mut viewport = ViewportTracker::new(width, height);
    gate.resize_view(width, height);
    let mut stats = FrameStats::new();
    let mut panel = DebugPanel::new();
    let mut close_requested = false;
    let mut last_frame = Instant::now();

    debug!("Start frame loop");
    while !close_requested && !shutdown.is_requested() && rosrust::is_ok() {
        // point clouds first
        subscription.inbox_mut().poll();

        // window events
        let mut input_result = Ok(());
        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent { event, .. } => {
                    trace!("Window event: {:?}", event);
                    if let WindowEvent::CloseRequested = event {
                        close_requested = true;
                    }
                    let result = handle_window_event(event, &mut input, &mut gate);
                    if input_result.is_ok() {
                        input_result = result;
                    }
                }
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => (),
            }
        });
        input_result.context("Failed to control the camera")?;

        // resize view
        let (width, height) = display.get_framebuffer_dimensions();
        if let Some((width, height)) = viewport.update(width, height) {
            gate.resize_view(width, height);
        }

        let now = Instant::now();
        stats.record(now.duration_since(last_frame));
        last_frame = now;

        // gui
        let mut actions = Vec::new();
        let inbox = subscription.inbox();
        gate.new_frame_overlay(|ctx| actions = panel.ui(ctx, &stats, inbox));
        panel.apply(&actions, &mut gate)?;

        gate.render_once().context("Failed to render frame")?;

        rate.sleep();
    }

    gate.finalize();
    info!("Bye. 👋");
    Ok(())
}

/// Forwards a window event to the GUI first, and then to the camera controls.
fn handle_window_event(
    event: WindowEvent<'_>,
    input: &mut CameraInput,
    gate: &mut GliumGate,
) -> GateResult<()> {
    gate.on_window_event(&event);
    let ui_has_focus = gate.overlay_has_focus();
    match event {
        WindowEvent::MouseInput { state, button, .. } => {
            input.on_mouse_button(button, state);
            Ok(())
        }
        WindowEvent::CursorMoved { position, .. } => {
            input.on_cursor_moved(position, ui_has_focus, gate)
        }
        WindowEvent::CursorLeft { .. } => {
            input.on_cursor_left();
            Ok(())
        }
        WindowEvent::MouseWheel { delta, .. } => input.on_scroll(delta, ui_has_focus, gate),
        _ => Ok(()),
    }
}
