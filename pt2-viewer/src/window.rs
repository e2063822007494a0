use anyhow::{Result, anyhow};
use log::debug;
use render_gate::glium::glutin::dpi::PhysicalSize;
use render_gate::glium::glutin::event_loop::EventLoop;
use render_gate::glium::{Display, glutin};

pub struct WindowOptions<'a> {
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

/// Creates the viewer window together with an OpenGL 3.3 core context.
pub fn create_display(event_loop: &EventLoop<()>, options: &WindowOptions) -> Result<Display> {
    let wb = glutin::window::WindowBuilder::new()
        .with_title(options.title)
        .with_inner_size(PhysicalSize::new(options.width, options.height))
        .with_resizable(true);
    let cb = glutin::ContextBuilder::new()
        .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
        .with_gl_profile(glutin::GlProfile::Core)
        .with_gl_forward_compatible(true)
        .with_depth_buffer(24)
        .with_vsync(options.vsync);
    let display = match Display::new(wb, cb, event_loop) {
        Ok(d) => d,
        Err(e) => return Err(anyhow!("Failed to create the window: {e}")),
    };
    debug!("Window opened: {:?}", display.gl_window().window().id());
    Ok(display)
}
