// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

pub mod components;
pub mod gjk;
pub mod hull;
pub mod physics;
pub mod settings;
pub mod simplex;
pub mod support;
pub mod time_resource;
pub mod utils;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};

pub use crate::components::collider_component::{ObbCollider, WorldObb};
pub use crate::components::transform_component::TransformComponent;
pub use crate::components::velocity_component::VelocityComponent;
pub use crate::gjk::{
    GjkParams, GjkReport, GjkResult, gjk_intersect, gjk_intersect_pairs, gjk_intersect_with_params,
};
pub use crate::hull::{ConvexHull, HullError, Obb, PointHull};
pub use crate::physics::collision_system::CollisionSystem;
pub use crate::physics::movement_system::MovementSystem;
pub use crate::physics::physics_resource::{CollisionFrame, CollisionPair};
pub use crate::settings::{Settings, SettingsError};
pub use crate::time_resource::TimeResource;

/// Phases of one fixed physics step, run in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Per-body state changes ahead of detection, such as spin and bounds.
    Prepare,
    /// World boxes are refreshed and every pair is tested.
    Detect,
    /// Reactions to this step's collision frame.
    Respond,
    Integrate,
}

/// Headless simulation: an ECS world plus the schedule run once per fixed step.
pub struct Engine {
    pub world: World,
    pub schedule: Schedule,
}

impl Engine {
    pub fn new(settings: &Settings) -> Self {
        let mut world = World::new();
        world.insert_resource(TimeResource::from_settings(&settings.simulation));
        world.insert_resource(GjkParams::from(&settings.gjk));
        world.insert_resource(CollisionFrame::default());

        let mut schedule = Schedule::default();
        schedule.configure_sets(
            (
                PhysicsSet::Prepare,
                PhysicsSet::Detect,
                PhysicsSet::Respond,
                PhysicsSet::Integrate,
            )
                .chain(),
        );
        schedule.add_systems(MovementSystem::apply_spin.in_set(PhysicsSet::Prepare));
        schedule.add_systems(
            (
                CollisionSystem::refresh_world_obbs,
                CollisionSystem::detect_collisions,
            )
                .chain()
                .in_set(PhysicsSet::Detect),
        );
        schedule.add_systems(MovementSystem::integrate.in_set(PhysicsSet::Integrate));

        log::info!(
            "Engine ready: physics step {}s, GJK cap {} iterations",
            settings.simulation.physics_step,
            settings.gjk.max_iterations
        );

        Self { world, schedule }
    }

    /// Runs exactly one fixed physics step.
    pub fn step(&mut self) {
        self.schedule.run(&mut self.world);
    }

    /// Feeds one frame's elapsed time into the clock and runs the steps it makes due.
    pub fn advance_frame(&mut self, frame_dt: f32) -> u32 {
        let steps = self.world.resource_mut::<TimeResource>().advance(frame_dt);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Drives the clock at a fixed frame rate for `duration` seconds. Returns the steps run.
    ///
    /// `on_frame` sees the engine after every frame, with the number of steps
    /// that frame ran. A frame rate that is not positive runs nothing.
    pub fn run_for<F>(&mut self, duration: f32, frame_rate: f32, mut on_frame: F) -> u64
    where
        F: FnMut(&Engine, u32),
    {
        if !(frame_rate > 0.0 && frame_rate.is_finite()) {
            log::warn!("Frame rate {} is not positive, nothing to run", frame_rate);
            return 0;
        }

        let frame_dt = 1.0 / frame_rate;
        let frames = (duration * frame_rate).round() as u64;
        let mut steps = 0u64;
        for _ in 0..frames {
            let frame_steps = self.advance_frame(frame_dt);
            steps += frame_steps as u64;
            on_frame(self, frame_steps);
        }
        log::debug!("Ran {} frames, {} physics steps", frames, steps);
        steps
    }

    pub fn collision_frame(&self) -> &CollisionFrame {
        self.world.resource::<CollisionFrame>()
    }
}
