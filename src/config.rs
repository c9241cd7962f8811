//! Runtime configuration: an optional JSON file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_BOX_SPEED;
use crate::camera::CameraConfig;
use crate::cli::{Cli, CollisionArg};
use crate::core::collision::{CollisionStrategy, DEFAULT_SPHERE_RADIUS};
use crate::scenes::{CAMERA_SPAWN, CAMERA_SPAWN_PITCH, CAMERA_SPAWN_YAW};

pub const DEFAULT_TICK_RATE: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub camera: CameraConfig,
    pub collision: CollisionStrategy,
    /// Free flight instead of walking on the spawn height
    pub free_flight: bool,
    /// Obstacle file replacing the built-in warehouse volumes
    pub obstacles: Option<PathBuf>,
    /// Fixed tick rate for headless runs (Hz)
    pub tick_rate: f32,
    pub box_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                position: CAMERA_SPAWN,
                yaw: CAMERA_SPAWN_YAW,
                pitch: CAMERA_SPAWN_PITCH,
                ..CameraConfig::default()
            },
            collision: CollisionStrategy::default(),
            free_flight: false,
            obstacles: None,
            tick_rate: DEFAULT_TICK_RATE,
            box_speed: DEFAULT_BOX_SPEED,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse config json")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("load config from {}", path.display()))
    }

    /// File (if given) then CLI flags
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        ensure!(
            config.tick_rate.is_finite() && config.tick_rate > 0.0,
            "tick_rate must be a positive number of Hz, got {}",
            config.tick_rate
        );
        log::debug!("resolved config: {config:?}");
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(kind) = cli.collision {
            self.collision = match kind {
                CollisionArg::Point => CollisionStrategy::PointInBox,
                CollisionArg::Sphere => CollisionStrategy::Sphere {
                    radius: cli.radius.unwrap_or(DEFAULT_SPHERE_RADIUS),
                },
            };
        } else if let (Some(radius), CollisionStrategy::Sphere { .. }) = (cli.radius, self.collision) {
            self.collision = CollisionStrategy::Sphere { radius };
        }
        if cli.free_flight {
            self.free_flight = true;
        }
        if let Some(path) = &cli.obstacles {
            self.obstacles = Some(path.clone());
        }
        if let Some(hz) = cli.tick_rate {
            self.tick_rate = hz;
        }
    }
}
