//! Tunables for the simulation, in pixels and ticks.
//!
//! The simulation runs in a 600×400 pixel space; the display layer projects
//! it onto a 60×20 cell terminal surface.

// ── Screen ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 400;

/// Bottom edge of every grounded sprite.
pub const FLOOR_Y: i32 = SCREEN_HEIGHT - 20;

/// Pixels covered by one terminal cell.
pub const CELL_WIDTH: i32 = 10;
pub const CELL_HEIGHT: i32 = 20;

pub const COLUMNS: u16 = (SCREEN_WIDTH / CELL_WIDTH) as u16;
pub const ROWS: u16 = (SCREEN_HEIGHT / CELL_HEIGHT) as u16;

// ── Timing ────────────────────────────────────────────────────────────────────

pub const DEFAULT_FPS: u32 = 60;

// ── Player physics ────────────────────────────────────────────────────────────

pub const GRAVITY: i32 = 1;
pub const JUMP_IMPULSE: i32 = -15;

pub const PLAYER_X: i32 = 50;
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 50;

// ── Obstacles ─────────────────────────────────────────────────────────────────

pub const OBSTACLE_WIDTH: i32 = 20;
pub const OBSTACLE_HEIGHT: i32 = 40;
pub const OBSTACLE_SPEED: i32 = 5;

pub const SPAWN_MIN_INTERVAL: u32 = 30;
pub const SPAWN_MAX_INTERVAL: u32 = 90;

// ── Background ────────────────────────────────────────────────────────────────

pub const SCROLL_SPEED: i32 = 5;

// ── Score ─────────────────────────────────────────────────────────────────────

/// Score is kept in hundredths of a point so the per-tick increment is exact.
pub const SCORE_SCALE: u64 = 100;
/// 0.05 points per tick.
pub const SCORE_PER_TICK: u64 = 5;
