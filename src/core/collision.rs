use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::AABB;
use crate::traits::CollisionTest;

pub const DEFAULT_SPHERE_RADIUS: f32 = 0.3;

/// Named, immovable piece of scene geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub name: String,
    #[serde(flatten)]
    pub bounds: AABB,
}

impl Obstacle {
    pub fn new(name: impl Into<String>, bounds: AABB) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// Static obstacle volumes, built once at scene setup and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Union of every obstacle's bounds
    pub fn bounds(&self) -> Option<AABB> {
        self.obstacles
            .iter()
            .map(|o| o.bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn first_hit(&self, test: &dyn CollisionTest, candidate: Vec3) -> Option<usize> {
        test.first_hit(candidate, &self.obstacles)
    }
}

impl FromIterator<Obstacle> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Candidate treated as a zero-size point
#[derive(Debug, Clone, Copy, Default)]
pub struct PointInBox;

impl CollisionTest for PointInBox {
    fn first_hit(&self, candidate: Vec3, obstacles: &[Obstacle]) -> Option<usize> {
        obstacles
            .iter()
            .position(|o| o.bounds.contains_point(candidate))
    }

    fn name(&self) -> &'static str {
        "point-in-box"
    }
}

/// Candidate treated as the centre of a sphere of fixed radius
#[derive(Debug, Clone, Copy)]
pub struct SphereCollider {
    pub radius: f32,
}

impl SphereCollider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Default for SphereCollider {
    fn default() -> Self {
        Self::new(DEFAULT_SPHERE_RADIUS)
    }
}

impl CollisionTest for SphereCollider {
    fn first_hit(&self, candidate: Vec3, obstacles: &[Obstacle]) -> Option<usize> {
        obstacles
            .iter()
            .position(|o| o.bounds.intersects_sphere(candidate, self.radius))
    }

    fn name(&self) -> &'static str {
        "sphere-vs-box"
    }
}

/// Configuration-level choice of obstacle test
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollisionStrategy {
    #[default]
    PointInBox,
    Sphere { radius: f32 },
}

impl CollisionStrategy {
    pub fn build(&self) -> Box<dyn CollisionTest> {
        match *self {
            CollisionStrategy::PointInBox => Box::new(PointInBox),
            CollisionStrategy::Sphere { radius } => Box::new(SphereCollider::new(radius)),
        }
    }
}
