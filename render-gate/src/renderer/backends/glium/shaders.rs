//! GLSL sources of the fixed scene content.

pub const GRID_VERT: &str = r#"
#version 330 core

in vec2 position;

uniform mat4 view_projection_matrix;
uniform float x_min;
uniform float x_max;
uniform float y_min;
uniform float y_max;

void main() {
    vec3 world = vec3(mix(x_min, x_max, position.x), mix(y_min, y_max, position.y), 0.0);
    gl_Position = view_projection_matrix * vec4(world, 1.0);
}
"#;

pub const GRID_FRAG: &str = r#"
#version 330 core

uniform vec4 color;

out vec4 frag_color;

void main() {
    frag_color = color;
}
"#;

pub const CUBE_VERT: &str = r#"
#version 330 core

in vec3 position;
in vec3 normal;

uniform mat4 view_projection_matrix;
uniform float size;

out vec3 v_normal;

void main() {
    v_normal = normal;
    // the cube sits on the xy-plane
    vec3 world = position * size + vec3(0.0, 0.0, size * 0.5);
    gl_Position = view_projection_matrix * vec4(world, 1.0);
}
"#;

pub const CUBE_FRAG: &str = r#"
#version 330 core

in vec3 v_normal;

uniform vec3 color;

out vec4 frag_color;

const vec3 LIGHT_DIRECTION = normalize(vec3(0.3, 0.5, 1.0));

void main() {
    float diffuse = max(dot(normalize(v_normal), LIGHT_DIRECTION), 0.0);
    frag_color = vec4(color * (0.3 + 0.7 * diffuse), 1.0);
}
"#;
