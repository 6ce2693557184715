//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current value
//! (and, where needed, an RNG handle) and returns a brand-new value.  Side
//! effects are limited to the injected RNG.

use log::{debug, trace};
use rand::Rng;

use crate::constants::{
    FLOOR_Y, GRAVITY, JUMP_IMPULSE, OBSTACLE_HEIGHT, OBSTACLE_SPEED, OBSTACLE_WIDTH,
    PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_X, SCORE_PER_TICK, SCREEN_WIDTH, SCROLL_SPEED,
};
use crate::entities::{
    Background, GameStatus, Obstacle, Player, Rect, RunState, Score, SpawnPolicy, SpawnTimer,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A grounded player standing on the floor line.
pub fn init_player() -> Player {
    Player {
        x: PLAYER_X,
        y: FLOOR_Y - PLAYER_HEIGHT,
        vy: 0,
        airborne: false,
    }
}

/// A fresh obstacle entering at the right edge, resting on the floor.
pub fn spawn_obstacle() -> Obstacle {
    Obstacle {
        x: SCREEN_WIDTH,
        y: FLOOR_Y - OBSTACLE_HEIGHT,
    }
}

/// Build the state for a new run.  The first spawn interval is drawn from
/// `rng` so a seeded RNG reproduces the whole run.
pub fn init_run(policy: &SpawnPolicy, rng: &mut impl Rng) -> RunState {
    RunState {
        player: init_player(),
        obstacles: Vec::new(),
        background: Background::default(),
        spawn: SpawnTimer {
            elapsed: 0,
            next: sample_interval(policy, rng),
        },
        score: Score::default(),
        status: GameStatus::Running,
        frame: 0,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Apply one tick of gravity, then clamp to the floor.  Landing clears the
/// airborne flag and the accumulated fall speed.
pub fn integrate(player: &Player) -> Player {
    let vy = player.vy + GRAVITY;
    let y = player.y + vy;
    if y + PLAYER_HEIGHT >= FLOOR_Y {
        Player {
            y: FLOOR_Y - PLAYER_HEIGHT,
            vy: 0,
            airborne: false,
            ..*player
        }
    } else {
        Player { y, vy, ..*player }
    }
}

/// Launch the player.  No-op while already airborne.
pub fn jump(player: &Player) -> Player {
    if player.airborne {
        return *player;
    }
    Player {
        vy: JUMP_IMPULSE,
        airborne: true,
        ..*player
    }
}

pub fn player_bounds(player: &Player) -> Rect {
    Rect {
        x: player.x,
        y: player.y,
        w: PLAYER_WIDTH,
        h: PLAYER_HEIGHT,
    }
}

// ── Obstacles ────────────────────────────────────────────────────────────────

pub fn advance_obstacle(obstacle: &Obstacle) -> Obstacle {
    Obstacle {
        x: obstacle.x - OBSTACLE_SPEED,
        ..*obstacle
    }
}

/// True once no pixel of the obstacle is left on screen.
pub fn is_expired(obstacle: &Obstacle) -> bool {
    obstacle_bounds(obstacle).right() <= 0
}

pub fn obstacle_bounds(obstacle: &Obstacle) -> Rect {
    Rect {
        x: obstacle.x,
        y: obstacle.y,
        w: OBSTACLE_WIDTH,
        h: OBSTACLE_HEIGHT,
    }
}

/// Draw the next spawn interval uniformly from the policy's inclusive range.
pub fn sample_interval(policy: &SpawnPolicy, rng: &mut impl Rng) -> u32 {
    rng.gen_range(policy.min_interval..=policy.max_interval)
}

/// Count one tick on the spawn timer.  Returns the updated timer and whether
/// an obstacle should be created this tick.
pub fn step_spawn_timer(
    timer: &SpawnTimer,
    policy: &SpawnPolicy,
    rng: &mut impl Rng,
) -> (SpawnTimer, bool) {
    let elapsed = timer.elapsed + 1;
    if elapsed > timer.next {
        let next = sample_interval(policy, rng);
        (SpawnTimer { elapsed: 0, next }, true)
    } else {
        (SpawnTimer { elapsed, ..*timer }, false)
    }
}

// ── Background ───────────────────────────────────────────────────────────────

pub fn advance_background(background: &Background) -> Background {
    let wrap = |x: i32| {
        let x = x - SCROLL_SPEED;
        if x <= -SCREEN_WIDTH {
            SCREEN_WIDTH
        } else {
            x
        }
    };
    Background {
        x1: wrap(background.x1),
        x2: wrap(background.x2),
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Strict overlap: rectangles that merely share an edge do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Index of the first live obstacle touching the player, in spawn order.
pub fn first_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let body = player_bounds(player);
    obstacles
        .iter()
        .position(|o| overlaps(&body, &obstacle_bounds(o)))
}

// ── Per-frame tick (nearly pure, RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// An ended run is returned unchanged.
pub fn tick(
    state: &RunState,
    jump_pressed: bool,
    policy: &SpawnPolicy,
    rng: &mut impl Rng,
) -> RunState {
    if state.status == GameStatus::Ended {
        return state.clone();
    }

    // ── 1. Input ─────────────────────────────────────────────────────────────
    let player = if jump_pressed {
        trace!("jump pressed at frame {}", state.frame + 1);
        jump(&state.player)
    } else {
        state.player
    };

    // ── 2. Physics ───────────────────────────────────────────────────────────
    let player = integrate(&player);

    // ── 3. Scroll the backdrop ───────────────────────────────────────────────
    let background = advance_background(&state.background);

    // ── 4. Move obstacles, dropping the ones that left the screen ────────────
    let mut obstacles: Vec<Obstacle> = state.obstacles.iter().map(advance_obstacle).collect();
    obstacles.retain(|o| !is_expired(o));

    // ── 5. Spawn ─────────────────────────────────────────────────────────────
    let (spawn, due) = step_spawn_timer(&state.spawn, policy, rng);
    if due {
        debug!(
            "spawning obstacle at frame {}, next in {} ticks",
            state.frame + 1,
            spawn.next
        );
        obstacles.push(spawn_obstacle());
    }

    // ── 6. Collision ends the run with the score earned so far ───────────────
    if first_collision(&player, &obstacles).is_some() {
        return RunState {
            player,
            obstacles,
            background,
            spawn,
            status: GameStatus::Ended,
            ..state.clone()
        };
    }

    // ── 7. Survived: bank the per-tick score ────────────────────────────────
    RunState {
        player,
        obstacles,
        background,
        spawn,
        score: Score(state.score.0 + SCORE_PER_TICK),
        status: GameStatus::Running,
        frame: state.frame + 1,
    }
}
