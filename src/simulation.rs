use anyhow::Result;

use crate::animation::{texture_time, ConveyorScript, Phase};
use crate::camera::Camera;
use crate::config::SimConfig;
use crate::core::movement::{MotionController, MoveOutcome, Movement, MovementMode};
use crate::frame::FrameInfo;
use crate::input::intents;
use crate::scenes::{conveyor_waypoints, create_warehouse_obstacles, load_obstacles};
use crate::traits::Controller;
use crate::types::ViewUniform;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub moved: usize,
    /// Obstacle indices that rejected a move, in intent order
    pub blocked: Vec<usize>,
    pub jumped: bool,
    pub phase_change: Option<Phase>,
}

/// Camera, motion controller and conveyor script advanced by one shared clock
pub struct Simulation {
    pub camera: Camera,
    motion: MotionController,
    conveyor: ConveyorScript,
    elapsed: f32,
}

impl Simulation {
    pub fn new(camera: Camera, motion: MotionController, conveyor: ConveyorScript) -> Self {
        Self {
            camera,
            motion,
            conveyor,
            elapsed: 0.0,
        }
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        let camera = Camera::from_config(&config.camera);
        let obstacles = match &config.obstacles {
            Some(path) => load_obstacles(path)?,
            None => create_warehouse_obstacles(),
        };
        let mode = if config.free_flight {
            MovementMode::FreeFlight
        } else {
            MovementMode::GroundLocked {
                ground_level: camera.position.y,
            }
        };
        let motion = MotionController::new(obstacles, config.collision, mode);
        let conveyor = ConveyorScript::new(conveyor_waypoints(), config.box_speed);

        Ok(Self::new(camera, motion, conveyor))
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn conveyor(&self) -> &ConveyorScript {
        &self.conveyor
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn tick<C: Controller + ?Sized>(&mut self, controller: &C, frame: &FrameInfo) -> TickReport {
        let mut report = TickReport::default();
        let dt = frame.delta;
        self.elapsed += dt;

        let (dx, dy) = controller.pointer_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.process_mouse_movement(dx, dy, true);
        }
        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }

        for movement in intents(controller) {
            // walking: space jumps instead of flying up
            if movement == Movement::Up && self.motion.is_ground_locked() {
                report.jumped |= self.motion.jump();
                continue;
            }
            match self.motion.process_movement(&mut self.camera, movement, dt) {
                MoveOutcome::Moved { .. } => report.moved += 1,
                MoveOutcome::Blocked { obstacle } => report.blocked.push(obstacle),
            }
        }

        self.motion.update(&mut self.camera, dt);

        report.phase_change = self.conveyor.tick(dt);
        if let Some(phase) = report.phase_change {
            log::debug!("conveyor phase -> {phase:?} at {:.2}s", self.elapsed);
        }
        report
    }

    pub fn view_uniform(&self, aspect_ratio: f32) -> ViewUniform {
        ViewUniform::new(&self.camera, aspect_ratio, texture_time(self.elapsed))
    }

    pub fn title(&self) -> String {
        let p = self.camera.position;
        format!("Sorting-Center-|-Camera-Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)
    }
}
