use bevy_ecs::prelude::*;

use crate::settings::SimulationSettings;

/// Fixed-timestep clock. Frames feed elapsed time in, physics drains it in
/// `physics_step` sized chunks.
#[derive(Resource, Debug, Clone)]
pub struct TimeResource {
    physics_step: f32,
    max_frame_time: f32,
    accumulator: f32,
    dt: f32,
    total_time: f64,
    frame_count: u64,
    step_count: u64,
    fps: f32,
    fps_frames: u32,
    fps_elapsed: f32,
}

impl Default for TimeResource {
    fn default() -> Self {
        Self::new(0.012, 0.25)
    }
}

impl TimeResource {
    pub fn new(physics_step: f32, max_frame_time: f32) -> Self {
        TimeResource {
            physics_step,
            max_frame_time,
            accumulator: 0.0,
            dt: 0.0,
            total_time: 0.0,
            frame_count: 0,
            step_count: 0,
            fps: 0.0,
            fps_frames: 0,
            fps_elapsed: 0.0,
        }
    }

    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self::new(settings.physics_step, settings.max_frame_time)
    }

    pub fn physics_step(&self) -> f32 {
        self.physics_step
    }

    /// Records a rendered frame and returns how many fixed steps are due.
    ///
    /// The frame time is clamped to `max_frame_time` so a long stall does not
    /// trigger a burst of catch-up steps. Leftover time stays in the
    /// accumulator for the next frame.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.max(0.0);
        self.update_frame_dt(frame_dt);

        self.accumulator += frame_dt.min(self.max_frame_time);
        let mut steps = 0;
        while self.accumulator >= self.physics_step {
            self.accumulator -= self.physics_step;
            steps += 1;
        }
        self.step_count += steps as u64;
        steps
    }

    fn update_frame_dt(&mut self, delta_time: f32) {
        self.dt = delta_time;
        self.total_time += delta_time as f64;
        self.frame_count += 1;

        self.fps_frames += 1;
        self.fps_elapsed += delta_time;
        if self.fps_elapsed > 1.0 {
            self.fps = self.fps_frames as f32 / self.fps_elapsed;
            self.fps_frames = 0;
            self.fps_elapsed = 0.0;
        }
    }

    pub fn frame_delta_time(&self) -> f32 {
        self.dt
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Frames per second over the last full second, zero until one has passed.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
