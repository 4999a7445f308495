use bevy_ecs::component::Component;
use glam::Vec3;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityComponent {
    pub translational: Vec3,
    pub acceleration: Vec3,
    /// XYZ euler increment in radians, applied once per fixed step.
    pub spin: Vec3,
}

impl VelocityComponent {
    pub fn linear(translational: Vec3) -> Self {
        Self {
            translational,
            ..Self::default()
        }
    }

    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    /// Negates one axis of the translational velocity.
    pub fn reflect_axis(&mut self, axis: usize) {
        debug_assert!(axis < 3, "velocity axis {axis} out of range");
        self.translational[axis] = -self.translational[axis];
    }
}
