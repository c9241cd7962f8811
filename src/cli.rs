// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "sorting-center")]
#[command(about = "First-person walkthrough of a warehouse sorting center", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON obstacle set replacing the built-in warehouse volumes
    #[arg(long, value_name = "FILE")]
    pub obstacles: Option<PathBuf>,

    /// Obstacle test used for camera movement
    #[arg(long, value_enum)]
    pub collision: Option<CollisionArg>,

    /// Camera sphere radius for the sphere test
    #[arg(long)]
    pub radius: Option<f32>,

    /// Allow vertical movement instead of walking at spawn height
    #[arg(long = "free-flight", default_value = "false")]
    pub free_flight: bool,

    /// Run without a window, walking forward for --ticks ticks
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Number of ticks to simulate in headless mode
    #[arg(long, default_value = "600")]
    pub ticks: u64,

    /// Fixed tick rate in Hz for headless mode
    #[arg(long = "tick-rate", value_parser = parse_tick_rate)]
    pub tick_rate: Option<f32>,
}

/// Tick rates must be finite and above zero
pub fn parse_tick_rate(s: &str) -> Result<f32, String> {
    let hz: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if hz.is_finite() && hz > 0.0 {
        Ok(hz)
    } else {
        Err(format!("tick rate must be a positive number of Hz, got {hz}"))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionArg {
    /// Camera is a point
    Point,
    /// Camera is a sphere
    Sphere,
}
