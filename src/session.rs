//! Session flow: start screen → play → game over → retry or quit.
//!
//! The loops here own no I/O.  Everything that touches the terminal goes
//! through a [`Frontend`], so the same state machine drives the real game and
//! scripted tests.

use std::io;

use crossterm::event::KeyCode;
use log::{debug, info};
use rand::Rng;

use crate::compute::{init_run, tick};
use crate::config::GameConfig;
use crate::entities::{GameStatus, RunOutcome, RunState, Score};

/// A logical input event, already stripped of terminal noise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Key(KeyCode),
    /// Window-level quit (Ctrl+C); honoured on every screen.
    QuitSignal,
}

pub fn is_jump_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Up)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    GameOver(Score),
}

/// What a menu screen decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Play,
    Retry,
    Quit,
}

/// Start screen: Space starts, the quit signal quits, anything else waits.
pub fn start_choice(input: Input) -> Option<Choice> {
    match input {
        Input::QuitSignal => Some(Choice::Quit),
        Input::Key(KeyCode::Char(' ')) => Some(Choice::Play),
        Input::Key(_) => None,
    }
}

/// Game-over screen: R retries, Esc or the quit signal quits.
pub fn game_over_choice(input: Input) -> Option<Choice> {
    match input {
        Input::QuitSignal | Input::Key(KeyCode::Esc) => Some(Choice::Quit),
        Input::Key(KeyCode::Char('r')) | Input::Key(KeyCode::Char('R')) => Some(Choice::Retry),
        Input::Key(_) => None,
    }
}

/// Terminal-facing half of the game: input, drawing and pacing.
pub trait Frontend {
    /// Drain pending input without blocking.
    fn poll_inputs(&mut self) -> io::Result<Vec<Input>>;
    /// Block until the next input arrives.
    fn wait_input(&mut self) -> io::Result<Input>;

    fn draw_start(&mut self) -> io::Result<()>;
    fn draw_frame(&mut self, state: &RunState) -> io::Result<()>;
    fn draw_game_over(&mut self, score: Score) -> io::Result<()>;

    /// Sleep until the next tick boundary.
    fn pace(&mut self);
    /// Forget the time spent outside the game loop before a run starts.
    fn reset_clock(&mut self) {}
}

fn wait_for_choice<F: Frontend>(
    frontend: &mut F,
    decide: fn(Input) -> Option<Choice>,
) -> io::Result<Choice> {
    loop {
        if let Some(choice) = decide(frontend.wait_input()?) {
            return Ok(choice);
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one play until the player hits an obstacle or the quit signal arrives.
pub fn play<F: Frontend>(
    frontend: &mut F,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> io::Result<RunOutcome> {
    let mut state = init_run(&config.spawn, rng);
    info!("run started, first obstacle after {} ticks", state.spawn.next);
    frontend.reset_clock();

    loop {
        let mut jump_pressed = false;
        for input in frontend.poll_inputs()? {
            match input {
                Input::QuitSignal => {
                    info!("quit during run at frame {}", state.frame);
                    return Ok(RunOutcome::Quit);
                }
                Input::Key(code) if is_jump_key(code) => jump_pressed = true,
                Input::Key(_) => {}
            }
        }

        state = tick(&state, jump_pressed, &config.spawn, rng);

        if state.status == GameStatus::Ended {
            info!(
                "run ended at frame {} with score {}",
                state.frame,
                state.score.points()
            );
            return Ok(RunOutcome::Collided(state.score));
        }

        frontend.draw_frame(&state)?;
        frontend.pace();
    }
}

// ── Session loop ──────────────────────────────────────────────────────────────

/// Drive screens until the player quits.  Returns the score of every run
/// that ended in a collision, oldest first.
pub fn run_session<F: Frontend>(
    frontend: &mut F,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> io::Result<Vec<Score>> {
    let mut scores = Vec::new();
    let mut screen = Screen::Start;

    loop {
        debug!("screen: {screen:?}");
        screen = match screen {
            Screen::Start => {
                frontend.draw_start()?;
                match wait_for_choice(frontend, start_choice)? {
                    Choice::Quit => break,
                    _ => Screen::Playing,
                }
            }
            Screen::Playing => match play(frontend, config, rng)? {
                RunOutcome::Quit => break,
                RunOutcome::Collided(score) => {
                    scores.push(score);
                    Screen::GameOver(score)
                }
            },
            Screen::GameOver(score) => {
                frontend.draw_game_over(score)?;
                match wait_for_choice(frontend, game_over_choice)? {
                    Choice::Quit => break,
                    _ => Screen::Start,
                }
            }
        };
    }

    Ok(scores)
}
