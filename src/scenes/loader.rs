use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::collision::{Obstacle, ObstacleSet};

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("obstacle #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("obstacle '{name}' has min {min:?} above max {max:?}")]
    InvertedBounds {
        name: String,
        min: [f32; 3],
        max: [f32; 3],
    },
}

fn validate(obstacles: &[Obstacle]) -> Result<(), SceneError> {
    for (index, obstacle) in obstacles.iter().enumerate() {
        if obstacle.name.trim().is_empty() {
            return Err(SceneError::EmptyName { index });
        }
        if !obstacle.bounds.is_valid() {
            return Err(SceneError::InvertedBounds {
                name: obstacle.name.clone(),
                min: obstacle.bounds.min.to_array(),
                max: obstacle.bounds.max.to_array(),
            });
        }
    }
    Ok(())
}

/// Parse a JSON array of `{ "name", "min": [x, y, z], "max": [x, y, z] }`
pub fn parse_obstacles(json: &str) -> Result<ObstacleSet> {
    let obstacles: Vec<Obstacle> =
        serde_json::from_str(json).context("parse obstacle json")?;
    validate(&obstacles)?;
    Ok(ObstacleSet::new(obstacles))
}

pub fn load_obstacles(path: impl AsRef<Path>) -> Result<ObstacleSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read obstacle file: {}", path.display()))?;
    let obstacles = parse_obstacles(&text)
        .with_context(|| format!("load obstacles from {}", path.display()))?;

    log::info!("Loaded {} obstacle volumes from {}", obstacles.len(), path.display());
    Ok(obstacles)
}
