mod bounce_controller;
mod scene_controller;

use std::env;
use std::path::PathBuf;

use gjk_engine::{Engine, Settings, TimeResource, TransformComponent};

use scene_controller::setup_scene;

fn main() {
    env_logger::init();

    let settings_path = env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let mut engine = Engine::new(&settings);
    let scene = setup_scene(&mut engine, &settings.scene);

    let mut contact_frames = 0u64;
    let mut was_colliding = false;

    engine.run_for(
        settings.simulation.duration,
        settings.simulation.frame_rate,
        |engine, steps| {
            if steps == 0 {
                return;
            }

            let colliding = engine
                .collision_frame()
                .are_in_contact(scene.target, scene.mover);
            if colliding {
                contact_frames += 1;
            }
            if colliding != was_colliding {
                let position = engine
                    .world
                    .get::<TransformComponent>(scene.mover)
                    .map(|transform| transform.position)
                    .unwrap_or_default();
                log::info!(
                    "{} at mover position {:.3}",
                    if colliding { "Contact began" } else { "Contact ended" },
                    position
                );
                was_colliding = colliding;
            }
        },
    );

    let time = engine.world.resource::<TimeResource>();
    log::info!(
        "Simulated {:.2}s over {} frames and {} physics steps; {} frames ended in contact",
        time.total_time(),
        time.frame_count(),
        time.step_count(),
        contact_frames
    );
}
