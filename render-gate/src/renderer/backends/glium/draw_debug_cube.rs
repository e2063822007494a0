//! Functionality to draw the debug cube.

use crate::renderer::backends::glium::shaders;
use crate::renderer::backends::glium::util::matrix_to_gl;
use crate::renderer::error::{GateError, GateResult};
use crate::renderer::settings::Color;
use glium::implement_vertex;
use glium::index::{NoIndices, PrimitiveType};
use glium::uniform;
use glium::{
    BackfaceCullingMode, DepthTest, Display, DrawParameters, Program, Surface, VertexBuffer,
};
use nalgebra::Matrix4;

#[derive(Copy, Clone)]
struct CubeVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

implement_vertex!(CubeVertex, position, normal);

/// Outward normal and the two in-plane axes of each face.
/// The axes are ordered, so that `axis_u x axis_v == normal` (counter clockwise winding).
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
];

/// Unit cube centered at the origin, as a triangle list.
fn cube_vertices() -> Vec<CubeVertex> {
    let mut vertices = Vec::with_capacity(36);
    for (normal, u, v) in FACES {
        let corner = |su: f32, sv: f32| CubeVertex {
            position: [
                normal[0] * 0.5 + u[0] * su + v[0] * sv,
                normal[1] * 0.5 + u[1] * su + v[1] * sv,
                normal[2] * 0.5 + u[2] * su + v[2] * sv,
            ],
            normal,
        };
        let (a, b, c, d) = (
            corner(-0.5, -0.5),
            corner(0.5, -0.5),
            corner(0.5, 0.5),
            corner(-0.5, 0.5),
        );
        vertices.extend_from_slice(&[a, b, c, a, c, d]);
    }
    vertices
}

pub struct DebugCubeRenderer {
    vertex_buffer: VertexBuffer<CubeVertex>,
    shader_program: Program,
    size: f32,
}

impl DebugCubeRenderer {
    pub fn new(display: &Display, size: f32) -> GateResult<Self> {
        let vertex_buffer =
            VertexBuffer::new(display, &cube_vertices()).map_err(GateError::graphics)?;
        let shader_program =
            Program::from_source(display, shaders::CUBE_VERT, shaders::CUBE_FRAG, None)
                .map_err(GateError::graphics)?;
        Ok(DebugCubeRenderer {
            vertex_buffer,
            shader_program,
            size,
        })
    }

    pub fn draw<S: Surface>(
        &self,
        frame: &mut S,
        view_projection_matrix: &Matrix4<f64>,
        color: Color,
    ) -> GateResult<()> {
        let uniforms = uniform! {
            view_projection_matrix: matrix_to_gl(view_projection_matrix),
            size: self.size,
            color: color.to_array(),
        };
        let draw_parameters = DrawParameters {
            depth: glium::Depth {
                write: true,
                test: DepthTest::IfLess,
                ..Default::default()
            },
            backface_culling: BackfaceCullingMode::CullClockwise,
            ..Default::default()
        };
        frame
            .draw(
                &self.vertex_buffer,
                &NoIndices(PrimitiveType::TrianglesList),
                &self.shader_program,
                &uniforms,
                &draw_parameters,
            )
            .map_err(GateError::graphics)
    }
}
