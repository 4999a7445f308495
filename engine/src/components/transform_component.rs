use bevy_ecs::component::Component;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TransformComponent {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl TransformComponent {
    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            scale,
            ..Self::default()
        }
    }

    /// Translation, then rotation, then scale.
    pub fn to_mat4(&self) -> Mat4 {
        let translation_matrix = Mat4::from_translation(self.position);
        let rotation_matrix = Mat4::from_quat(self.rotation);
        let scale_matrix = Mat4::from_scale(self.scale);

        translation_matrix * rotation_matrix * scale_matrix
    }

    /// Composes an euler increment (radians) onto the current rotation, in local space.
    ///
    /// The increment is `Rz * Ry * Rx`: x is applied first, z last.
    pub fn rotate_euler(&mut self, euler: Vec3) {
        let delta = Quat::from_euler(EulerRot::ZYX, euler.z, euler.y, euler.x);
        self.rotation = (self.rotation * delta).normalize();
    }
}
