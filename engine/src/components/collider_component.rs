use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::transform_component::TransformComponent;
use crate::hull::Obb;

/// Box collider described by its eight model-space corners.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(TransformComponent, WorldObb)]
pub struct ObbCollider {
    local_corners: [Vec3; 8],
}

impl ObbCollider {
    pub fn cube(half_extent: f32) -> Self {
        Self::cuboid(Vec3::splat(half_extent))
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        Self {
            local_corners: *Obb::axis_aligned(Vec3::ZERO, half_extents).corners(),
        }
    }

    pub fn from_corners(local_corners: [Vec3; 8]) -> Self {
        Self { local_corners }
    }

    pub fn local_corners(&self) -> &[Vec3; 8] {
        &self.local_corners
    }

    /// Corners moved into world space by the entity's current pose.
    pub fn world_obb(&self, transform: &TransformComponent) -> Obb {
        Obb::from_local_corners(&self.local_corners, &transform.to_mat4())
    }
}

/// World-space box refreshed every fixed step before collision detection.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WorldObb(pub Obb);

impl Default for WorldObb {
    fn default() -> Self {
        Self(Obb::axis_aligned(Vec3::ZERO, Vec3::ZERO))
    }
}
