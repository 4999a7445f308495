use bevy_ecs::prelude::{Entity, Query, Res, ResMut};

use crate::{
    components::collider_component::{ObbCollider, WorldObb},
    components::transform_component::TransformComponent,
    gjk::{GjkParams, gjk_intersect_with_params},
    physics::physics_resource::{CollisionFrame, CollisionPair},
    utils::scope_timer::ScopeTimer,
};

#[derive(Default)]
pub struct CollisionSystem {}

impl CollisionSystem {
    /// Recomputes every collider's world-space corners from its current pose.
    pub fn refresh_world_obbs(
        mut query: Query<(&TransformComponent, &ObbCollider, &mut WorldObb)>,
    ) {
        for (transform, collider, mut world_obb) in query.iter_mut() {
            world_obb.0 = collider.world_obb(transform);
        }
    }

    /// Runs GJK on every unordered pair of colliders and records the overlapping ones.
    pub fn detect_collisions(
        query: Query<(Entity, &WorldObb)>,
        params: Res<GjkParams>,
        mut frame: ResMut<CollisionFrame>,
    ) {
        let _timer = ScopeTimer::new("CollisionSystem::detect_collisions");
        frame.clear();

        let mut bodies: Vec<(Entity, &WorldObb)> = query.iter().collect();
        bodies.sort_unstable_by_key(|(entity, _)| *entity);

        for (i, (entity_a, obb_a)) in bodies.iter().enumerate() {
            for (entity_b, obb_b) in &bodies[i + 1..] {
                frame.tests_run += 1;
                let report = gjk_intersect_with_params(&obb_a.0, &obb_b.0, &params);
                if report.result.intersects() {
                    log::debug!(
                        "Collision between {:?} and {:?} after {} iterations",
                        entity_a,
                        entity_b,
                        report.iterations
                    );
                    frame.add_pair(CollisionPair {
                        entity_a: *entity_a,
                        entity_b: *entity_b,
                    });
                }
            }
        }
    }
}
