//! An orbit navigation.

use std::f64::consts::PI;

use crate::navigation::{Matrices, Navigation};
use nalgebra::{Matrix4, Point, Rotation3, Unit, Vector2, Vector3};

const ONE_DEGREE: f64 = 1.0 / 180.0 * PI;

/// The camera can never look straight up or down, because the up vector would become ambiguous.
const MAX_PITCH: f64 = 89.0 * ONE_DEGREE;

/// Change of [OrbitNavigation::log_camera_distance] per unit of zoom.
const ZOOM_STEP: f64 = 0.1;

const MIN_LOG_CAMERA_DISTANCE: f64 = -10.0;
const MAX_LOG_CAMERA_DISTANCE: f64 = 20.0;

/// A navigation, that orbits the camera around a focus point.
/// Rotating changes the angle from which the camera looks at the focus point,
/// panning moves the focus point, zooming changes the distance between the two.
pub struct OrbitNavigation {
    /// size of the window in pixels
    window_size: Vector2<f64>,

    /// position in world space, that the camera is looking at.
    focus: Vector3<f64>,

    /// How close the camera is to the [Self::focus] point.
    log_camera_distance: f64,

    /// Rotation of the camera.
    ///  First component: how much the camera "looks up" or "looks down".
    ///  Second component: how much the camera "looks left" or "looks right"
    camera_rotation: Vector2<f64>,

    view_matrix: Matrix4<f64>,
    projection_matrix: Matrix4<f64>,
    view_matrix_inv: Matrix4<f64>,
    projection_matrix_inv: Matrix4<f64>,
}

impl OrbitNavigation {
    fn min_render_distance(&self) -> f64 {
        self.camera_distance() * 0.01
    }

    fn max_render_distance(&self) -> f64 {
        self.camera_distance() * 10000.0
    }

    pub fn new() -> Self {
        let mut nav = OrbitNavigation {
            window_size: Vector2::new(1.0, 1.0),
            focus: Vector3::new(0.0, 0.0, 0.0),
            log_camera_distance: 10.0_f64.log2(),
            camera_rotation: Vector2::new(PI / 4.0, PI / 4.0),
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
            view_matrix_inv: Matrix4::identity(),
            projection_matrix_inv: Matrix4::identity(),
        };
        nav.update();
        nav
    }

    /// Distance between the camera and the focus point.
    pub fn camera_distance(&self) -> f64 {
        2.0_f64.powf(self.log_camera_distance)
    }

    /// The point the camera is looking at.
    pub fn focus(&self) -> Vector3<f64> {
        self.focus
    }

    fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(
            &Unit::new_unchecked(Vector3::new(0.0, 0.0, 1.0)),
            self.camera_rotation[1],
        ) * Rotation3::from_axis_angle(
            &Unit::new_unchecked(Vector3::new(0.0, 1.0, 0.0)),
            self.camera_rotation[0],
        )
    }
}

impl Navigation for OrbitNavigation {
    fn on_window_resized(&mut self, w: f64, h: f64) {
        self.window_size.x = w;
        self.window_size.y = h;
    }

    fn rotate(&mut self, dx: f64, dy: f64) {
        self.camera_rotation.y -= dx * ONE_DEGREE;
        let new_rot_x = self.camera_rotation.x + dy * ONE_DEGREE;
        self.camera_rotation.x = new_rot_x.clamp(-MAX_PITCH, MAX_PITCH);
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        let rotation = self.rotation();
        let right_direction = rotation * Vector3::new(0.0, -1.0, 0.0);
        let up_direction = rotation * Vector3::new(0.0, 0.0, 1.0);

        // the scene follows the mouse, so the focus point moves the opposite way
        self.focus = self.focus - right_direction * dx + up_direction * dy;
    }

    fn zoom(&mut self, d: f64) {
        let new_log_distance = self.log_camera_distance - d * ZOOM_STEP;
        self.log_camera_distance =
            new_log_distance.clamp(MIN_LOG_CAMERA_DISTANCE, MAX_LOG_CAMERA_DISTANCE);
    }

    fn update(&mut self) -> Matrices {
        let rotation = self.rotation();
        let camera_direction = rotation * Vector3::new(1.0, 0.0, 0.0);
        let up_direction = rotation * Vector3::new(0.0, 0.0, 1.0);
        let camera_position = self.focus - camera_direction * self.camera_distance();

        self.view_matrix = Matrix4::look_at_rh(
            &Point::from(camera_position),
            &Point::from(self.focus),
            &up_direction,
        );
        self.view_matrix_inv = self.view_matrix.try_inverse().unwrap(); // view matrix is always invertible, so safe to unwrap.

        self.projection_matrix = Matrix4::new_perspective(
            self.window_size.x / self.window_size.y,
            PI / 4.0,
            self.min_render_distance(),
            self.max_render_distance(),
        );
        self.projection_matrix_inv = self.projection_matrix.try_inverse().unwrap(); // same as for the view matrix

        Matrices {
            view_matrix: self.view_matrix,
            projection_matrix: self.projection_matrix,
            view_matrix_inv: self.view_matrix_inv,
            projection_matrix_inv: self.projection_matrix_inv,
            window_size: self.window_size,
        }
    }
}

impl Default for OrbitNavigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{MAX_PITCH, OrbitNavigation};
    use crate::navigation::Navigation;
    use nalgebra::{Point3, Vector3};

    fn camera_position(nav: &mut OrbitNavigation) -> Point3<f64> {
        nav.update().view_matrix_inv.transform_point(&Point3::origin())
    }

    #[test]
    fn test_camera_keeps_distance_to_focus() {
        let mut nav = OrbitNavigation::new();
        nav.on_window_resized(800.0, 600.0);
        nav.rotate(30.0, -12.0);
        let position = camera_position(&mut nav);
        let distance = (position.coords - nav.focus()).norm();
        assert!((distance - nav.camera_distance()).abs() < 1e-9);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut nav = OrbitNavigation::new();
        nav.rotate(0.0, 1000.0);
        assert_eq!(nav.camera_rotation.x, MAX_PITCH);
        nav.rotate(0.0, -5000.0);
        assert_eq!(nav.camera_rotation.x, -MAX_PITCH);
    }

    #[test]
    fn test_rotate_does_not_move_focus() {
        let mut nav = OrbitNavigation::new();
        let before = camera_position(&mut nav);
        nav.rotate(90.0, 0.0);
        let after = camera_position(&mut nav);
        assert_eq!(nav.focus(), Vector3::zeros());
        assert!((before - after).norm() > 1.0);
    }

    #[test]
    fn test_zoom_keeps_distance_positive() {
        let mut nav = OrbitNavigation::new();
        let initial = nav.camera_distance();
        nav.zoom(1.0);
        assert!(nav.camera_distance() < initial);
        for _ in 0..10_000 {
            nav.zoom(10.0);
        }
        assert!(nav.camera_distance() > 0.0);
        nav.zoom(-2.0);
        nav.zoom(2.0);
        assert!(nav.camera_distance() > 0.0);
    }

    #[test]
    fn test_pan_moves_focus_in_view_plane() {
        let mut nav = OrbitNavigation::new();
        nav.pan(1.0, 0.0);
        let focus = nav.focus();
        assert!((focus.norm() - 1.0).abs() < 1e-9);

        // panning horizontally never changes the height
        assert!(focus.z.abs() < 1e-9);

        // and the camera moves along with the focus point
        let position = camera_position(&mut nav);
        let distance = (position.coords - focus).norm();
        assert!((distance - nav.camera_distance()).abs() < 1e-9);
    }
}
