use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::{
    components::{transform_component::TransformComponent, velocity_component::VelocityComponent},
    time_resource::TimeResource,
};

pub struct MovementSystem {}

impl MovementSystem {
    /// Applies each entity's per-step spin to its rotation.
    pub fn apply_spin(mut query: Query<(&mut TransformComponent, &VelocityComponent)>) {
        for (mut transform, velocity) in query.iter_mut() {
            if velocity.spin != Vec3::ZERO {
                transform.rotate_euler(velocity.spin);
            }
        }
    }

    /// Explicit Euler step: acceleration into velocity, then velocity into position.
    pub fn integrate(
        mut query: Query<(&mut TransformComponent, &mut VelocityComponent)>,
        time: Res<TimeResource>,
    ) {
        let delta_time = time.physics_step();
        for (mut transform, mut velocity) in query.iter_mut() {
            velocity.translational =
                Self::apply_acceleration(&velocity.translational, &velocity.acceleration, delta_time);
            transform.position =
                Self::apply_translation(&transform.position, &velocity.translational, delta_time);
        }
    }

    fn apply_acceleration(velocity: &Vec3, acceleration: &Vec3, delta_time: f32) -> Vec3 {
        *velocity + acceleration * delta_time
    }

    fn apply_translation(position: &Vec3, translational_velocity: &Vec3, delta_time: f32) -> Vec3 {
        *position + translational_velocity * delta_time
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const DELTA_TIME: f32 = 1.0;

    #[test]
    fn apply_translation() {
        let position = Vec3::new(0.0, 0.0, 0.0);
        let velocity = Vec3::new(1.0, 2.0, 3.0);
        let new_position = MovementSystem::apply_translation(&position, &velocity, DELTA_TIME);
        assert_eq!(new_position, Vec3::new(1.0, 2.0, 3.0) * DELTA_TIME);
        let newer_position =
            MovementSystem::apply_translation(&new_position, &velocity, DELTA_TIME);
        assert_eq!(newer_position, Vec3::new(2.0, 4.0, 6.0) * DELTA_TIME);
    }

    #[test]
    fn apply_acceleration() {
        let velocity = Vec3::new(-0.9, 0.0, 0.0);
        let acceleration = Vec3::new(0.0, -9.81, 0.0);
        let new_velocity = MovementSystem::apply_acceleration(&velocity, &acceleration, 0.5);
        assert_approx_eq!(new_velocity.x, -0.9, 1e-6);
        assert_approx_eq!(new_velocity.y, -4.905, 1e-6);
    }

    #[test]
    fn integrate_uses_physics_step() {
        let mut world = World::new();
        world.insert_resource(TimeResource::new(0.5, 1.0));
        let entity = world
            .spawn((
                TransformComponent::default(),
                VelocityComponent {
                    translational: Vec3::new(2.0, 0.0, 0.0),
                    acceleration: Vec3::new(0.0, 2.0, 0.0),
                    spin: Vec3::ZERO,
                },
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(MovementSystem::integrate);
        schedule.run(&mut world);

        let transform = world.get::<TransformComponent>(entity).unwrap();
        let velocity = world.get::<VelocityComponent>(entity).unwrap();
        assert_eq!(velocity.translational, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(transform.position, Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn apply_spin_rotates_once_per_run() {
        let mut world = World::new();
        let entity = world
            .spawn((
                TransformComponent::default(),
                VelocityComponent::default().with_spin(Vec3::new(0.0, 0.0, FRAC_PI_2)),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(MovementSystem::apply_spin);
        schedule.run(&mut world);

        let transform = world.get::<TransformComponent>(entity).unwrap();
        let rotated = transform.rotation * Vec3::X;
        assert_approx_eq!(rotated.x, 0.0, 1e-6);
        assert_approx_eq!(rotated.y, 1.0, 1e-6);
        assert_eq!(transform.position, Vec3::ZERO);
    }
}
