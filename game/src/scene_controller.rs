use bevy_ecs::prelude::*;
use bevy_ecs::schedule::IntoScheduleConfigs;
use glam::Vec3;
use gjk_engine::settings::SceneSettings;
use gjk_engine::{Engine, ObbCollider, PhysicsSet, TransformComponent, VelocityComponent};

use crate::bounce_controller::{
    BounceComponent, BoundsComponent, apply_bounds, apply_collision_bounce,
};

pub const CUBE_HALF_EXTENT: f32 = 0.25;
pub const TARGET_SCALE: f32 = 0.85;
pub const MOVER_SCALE: f32 = 0.2;
pub const MOVER_START: Vec3 = Vec3::new(-0.7, 0.0, 0.0);

pub struct Scene {
    pub target: Entity,
    pub mover: Entity,
}

/// Spawns the static target cube and the moving cube, and registers the demo systems.
pub fn setup_scene(engine: &mut Engine, settings: &SceneSettings) -> Scene {
    let spin = Vec3::new(
        settings.spin_degrees.x.to_radians(),
        settings.spin_degrees.y.to_radians(),
        settings.spin_degrees.z.to_radians(),
    );

    let target = engine
        .world
        .spawn((
            TransformComponent::from_position_scale(Vec3::ZERO, Vec3::splat(TARGET_SCALE)),
            ObbCollider::cube(CUBE_HALF_EXTENT),
            VelocityComponent::default().with_spin(spin),
        ))
        .id();

    let mover = engine
        .world
        .spawn((
            TransformComponent::from_position_scale(MOVER_START, Vec3::splat(MOVER_SCALE)),
            ObbCollider::cube(CUBE_HALF_EXTENT),
            VelocityComponent::linear(Vec3::new(-settings.speed, 0.0, 0.0)).with_spin(spin),
            BounceComponent::on_axis(0),
            BoundsComponent {
                half_extents: settings.bounds,
            },
        ))
        .id();

    engine
        .schedule
        .add_systems(apply_bounds.in_set(PhysicsSet::Prepare));
    engine
        .schedule
        .add_systems(apply_collision_bounce.in_set(PhysicsSet::Respond));

    Scene { target, mover }
}
