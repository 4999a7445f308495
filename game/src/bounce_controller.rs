use bevy_ecs::prelude::*;
use glam::Vec3;
use gjk_engine::{CollisionFrame, TransformComponent, VelocityComponent};

/// Reverses one velocity axis when the body is found colliding.
#[derive(Component, Debug, Clone, Copy)]
pub struct BounceComponent {
    /// Set for the step after a bounce so a body still inside its target
    /// does not reverse straight back into it.
    pub anti_stuck: bool,
    /// Velocity component to negate: 0 for x, 1 for y, 2 for z.
    pub axis: usize,
}

impl BounceComponent {
    pub fn on_axis(axis: usize) -> Self {
        debug_assert!(axis < 3, "bounce axis {axis} out of range");
        Self {
            anti_stuck: false,
            axis,
        }
    }
}

/// Keeps a body inside an axis-aligned region centred on the origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct BoundsComponent {
    pub half_extents: Vec3,
}

/// Negates each velocity axis whose position has left the bounds.
pub fn apply_bounds(mut query: Query<(&TransformComponent, &BoundsComponent, &mut VelocityComponent)>) {
    for (transform, bounds, mut velocity) in &mut query {
        for axis in 0..3 {
            if transform.position[axis].abs() > bounds.half_extents[axis] {
                velocity.reflect_axis(axis);
            }
        }
    }
}

/// Bounces colliding bodies, skipping the step right after a bounce.
pub fn apply_collision_bounce(
    frame: Res<CollisionFrame>,
    mut query: Query<(Entity, &mut BounceComponent, &mut VelocityComponent)>,
) {
    for (entity, mut bounce, mut velocity) in &mut query {
        if frame.is_colliding(entity) && !bounce.anti_stuck {
            velocity.reflect_axis(bounce.axis);
            bounce.anti_stuck = true;
            log::debug!("{:?} bounced on axis {}", entity, bounce.axis);
        } else if bounce.anti_stuck {
            bounce.anti_stuck = false;
        }
    }
}
