//! Command-line flags and the validated settings derived from them.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_FPS, SPAWN_MAX_INTERVAL, SPAWN_MIN_INTERVAL};
use crate::entities::SpawnPolicy;

#[derive(Parser, Debug)]
#[command(name = "dino_run")]
#[command(about = "Jump over the trees for as long as you can")]
pub struct Cli {
    /// Directory holding dino.txt, tree.txt and desert.txt
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,
    /// Target frame rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,
    /// Seed for obstacle timing (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Shortest gap between obstacles, in ticks
    #[arg(long, default_value_t = SPAWN_MIN_INTERVAL)]
    pub spawn_min: u32,
    /// Longest gap between obstacles, in ticks
    #[arg(long, default_value_t = SPAWN_MAX_INTERVAL)]
    pub spawn_max: u32,
    /// Append logs to this file (the terminal is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroFps,
    EmptySpawnRange { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFps => write!(f, "fps must be > 0"),
            Self::EmptySpawnRange { min, max } => {
                write!(f, "spawn-min ({min}) must not exceed spawn-max ({max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings the session needs once startup is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub fps: u32,
    pub spawn: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            fps: DEFAULT_FPS,
            spawn: SpawnPolicy {
                min_interval: SPAWN_MIN_INTERVAL,
                max_interval: SPAWN_MAX_INTERVAL,
            },
        }
    }
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.spawn_min > self.spawn_max {
            return Err(ConfigError::EmptySpawnRange {
                min: self.spawn_min,
                max: self.spawn_max,
            });
        }
        Ok(GameConfig {
            fps: self.fps,
            spawn: SpawnPolicy {
                min_interval: self.spawn_min,
                max_interval: self.spawn_max,
            },
        })
    }
}
