//! Rigid 3D transforms.

use std::ops::Mul;

use glam::{Mat3, Quat, Vec3};

/// Rigid 3D transform (position + orientation) in world coordinates (meters).
///
/// Composes by right-multiplication: `a * b` applies `b` in the local frame
/// of `a`. Offset poses (foot stance offsets, stencil probe offsets) are
/// derived this way from a body pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose3 {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose3 {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pure translation, identity rotation.
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            rotation: Quat::IDENTITY,
        }
    }

    /// Planar pose: position in the z = 0 plane with a heading about +z.
    pub fn from_xy_yaw(x: f32, y: f32, yaw: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, 0.0),
            rotation: Quat::from_rotation_z(yaw),
        }
    }

    #[inline]
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_quat(self.rotation)
    }

    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * point
    }
}

impl Default for Pose3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Pose3 {
    type Output = Pose3;

    fn mul(self, rhs: Pose3) -> Pose3 {
        Pose3 {
            translation: self.translation + self.rotation * rhs.translation,
            rotation: self.rotation * rhs.rotation,
        }
    }
}
