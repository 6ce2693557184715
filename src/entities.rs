//! All game entity types: pure data, no logic.

use crate::constants::{SCORE_SCALE, SCREEN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in pixel space.  `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

// ── Moving entities ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Vertical velocity in pixels per tick (negative = upward).
    pub vy: i32,
    pub airborne: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
}

/// Two copies of the backdrop placed side by side.  Each offset is the left
/// edge of one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background {
    pub x1: i32,
    pub x2: i32,
}

impl Default for Background {
    fn default() -> Self {
        Background {
            x1: 0,
            x2: SCREEN_WIDTH,
        }
    }
}

// ── Run bookkeeping ───────────────────────────────────────────────────────────

/// Accumulated score in hundredths of a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(pub u64);

impl Score {
    /// Whole points, truncated. This is what the player sees.
    pub fn points(&self) -> u64 {
        self.0 / SCORE_SCALE
    }
}

/// Ticks since the last spawn and the interval that must be exceeded before
/// the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnTimer {
    pub elapsed: u32,
    pub next: u32,
}

/// Inclusive range the spawn interval is sampled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnPolicy {
    pub min_interval: u32,
    pub max_interval: u32,
}

// ── Master run state ──────────────────────────────────────────────────────────

/// Everything one play needs.  Cloneable so the tick can return a new copy
/// without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct RunState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub background: Background,
    pub spawn: SpawnTimer,
    pub score: Score,
    pub status: GameStatus,
    /// Ticks completed without a collision.
    pub frame: u64,
}

/// How a single play ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Collided(Score),
    Quit,
}
