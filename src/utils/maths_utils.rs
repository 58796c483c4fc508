//! Minimal 3D math for the decorative model viewer: rotation about the
//! vertical axis plus a pinhole perspective projection onto a viewport.

/// A point in model space. Right-handed, +z towards the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotate about the y axis (the viewer's turntable spin).
    pub fn rotated_y(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotate about the x axis (fixed camera tilt).
    pub fn rotated_x(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }
}

/// Perspective-project onto a plane `camera_z` units in front of the
/// camera. Returns normalized (x, y) offsets from the viewport center
/// plus the view-space depth for shading/sorting.
///
/// Points at or behind the camera clamp to a minimal depth so a stray
/// vertex can never blow up to an infinite screen coordinate.
pub fn project(point: Vec3, camera_z: f32) -> (f32, f32, f32) {
    let depth = (camera_z - point.z).max(0.1);
    let scale = camera_z / depth;
    (point.x * scale, -point.y * scale, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.2, -0.7, 2.4);
        assert!(approx_eq(v.rotated_y(1.3).length(), v.length()));
        assert!(approx_eq(v.rotated_x(-0.4).length(), v.length()));
    }

    #[test]
    fn full_turn_is_identity() {
        let v = Vec3::new(0.5, 1.0, -2.0);
        let spun = v.rotated_y(std::f32::consts::TAU);
        assert!(approx_eq(spun.x, v.x));
        assert!(approx_eq(spun.z, v.z));
    }

    #[test]
    fn nearer_points_project_larger() {
        let near = project(Vec3::new(1.0, 0.0, 2.0), 5.0);
        let far = project(Vec3::new(1.0, 0.0, -2.0), 5.0);
        assert!(near.0 > far.0);
    }

    #[test]
    fn points_behind_the_camera_stay_finite() {
        let (x, y, depth) = project(Vec3::new(1.0, 1.0, 100.0), 5.0);
        assert!(x.is_finite() && y.is_finite());
        assert!(depth > 0.0);
    }
}
