//! Settings for initializing the rendering gate and for how the scene should look.

/// Configuration passed to the gate on initialization.
#[derive(Clone, Debug)]
pub struct GateConfig {
    /// Level at which the gate reports information about the graphics context.
    pub log_level: log::Level,

    /// Initial width of the view in pixels.
    pub view_width: u32,

    /// Initial height of the view in pixels.
    pub view_height: u32,

    /// Frame rate, the host is going to render at.
    /// Frames that take longer than `1 / fps` to render are reported.
    pub fps: u32,

    /// Settings for the fixed scene content.
    pub scene: SceneSettings,
}

/// Settings for controlling the look of the scene.
#[derive(Clone, Debug)]
pub struct SceneSettings {
    /// Background color
    pub bg_color: Color,

    /// Options for the grid to draw on the xy-plane.
    /// Set this to [None], to disable the grid.
    pub grid: Option<Grid>,

    /// Edge length of the debug cube.
    pub debug_cube_size: f32,
}

/// Settings for how the grid should be rendered.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Color of the grid lines.
    pub color: Color,

    /// Maximum opacity of the grid lines, with 0.0 being fully transparent and 1.0 being fully opaque.
    pub opacity: f32,

    /// The size of the whole grid.
    pub size: f64,

    /// The number of cells (along any axis).
    ///
    /// Together with [Self::size],
    /// this controls the grid spacing - to make the cells larger, either
    /// decrease (nr_cells)[Self::nr_cells], or increase (size)[Self::size].
    pub nr_cells: u8,

    /// Width of the grid lines in pixels.
    pub line_width: f32,
}

/// An RGB color value.
/// Each of the three channels should be in between 0.0 and 1.0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// red
    pub r: f32,

    /// green
    pub g: f32,

    /// blue
    pub b: f32,
}

impl Color {
    /// Creates a color from a r, g, b component
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Returns the same color with the r,g,b values clamped between 0.0. and 1.0
    pub fn clamped(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GREY_1: Color = Color::rgb(0.1, 0.1, 0.1);
    pub const GREY_5: Color = Color::rgb(0.5, 0.5, 0.5);
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            log_level: log::Level::Trace,
            view_width: 800,
            view_height: 600,
            fps: 60,
            scene: SceneSettings::default(),
        }
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            bg_color: Color::GREY_1,
            grid: Some(Grid::default()),
            debug_cube_size: 1.0,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            color: Color::GREY_5,
            opacity: 1.0,
            size: 10.0,
            nr_cells: 100,
            line_width: 1.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn test_color_clamped() {
        let color = Color::rgb(-0.5, 0.25, 3.0).clamped();
        assert_eq!(color, Color::rgb(0.0, 0.25, 1.0));
    }
}
