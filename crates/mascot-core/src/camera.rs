//! Camera description mirrored from the scene host.
//!
//! The host owns the real camera; this copy only exists so head tracking can
//! project the mascot into normalized device coordinates without a round trip
//! through JS every frame.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed page camera looking down -Z.
    pub fn page(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::new(0.0, 0.0, CAMERA_Z - 1.0),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World position → NDC x/y in [-1, 1] (y up).
    pub fn project(&self, world: Vec3) -> Vec2 {
        let ndc = (self.projection_matrix() * self.view_matrix()).project_point3(world);
        Vec2::new(ndc.x, ndc.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_on_axis_projects_to_center() {
        let cam = Camera::page(16.0 / 9.0);
        let p = cam.project(Vec3::new(0.0, 0.0, -2.0));
        assert!(p.length() < 1e-5);
    }

    #[test]
    fn right_of_axis_projects_right() {
        let cam = Camera::page(1.0);
        assert!(cam.project(Vec3::new(1.0, 0.0, -2.0)).x > 0.0);
        assert!(cam.project(Vec3::new(0.0, -1.0, -2.0)).y < 0.0);
    }
}
