use std::collections::VecDeque;
use std::io;

use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dino_run::config::GameConfig;
use dino_run::entities::*;
use dino_run::session::*;

/// Plays back canned input and records everything the session draws.
#[derive(Default)]
struct Scripted {
    /// Answers for the blocking menu waits, in order.
    waits: VecDeque<Input>,
    /// One batch per tick; ticks past the end see no input.
    polls: VecDeque<Vec<Input>>,
    start_screens: usize,
    frames: Vec<RunState>,
    game_overs: Vec<Score>,
    paces: usize,
}

impl Scripted {
    fn new(waits: Vec<Input>, polls: Vec<Vec<Input>>) -> Self {
        Scripted {
            waits: waits.into(),
            polls: polls.into(),
            ..Default::default()
        }
    }
}

impl Frontend for Scripted {
    fn poll_inputs(&mut self) -> io::Result<Vec<Input>> {
        Ok(self.polls.pop_front().unwrap_or_default())
    }

    fn wait_input(&mut self) -> io::Result<Input> {
        self.waits
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn draw_start(&mut self) -> io::Result<()> {
        self.start_screens += 1;
        Ok(())
    }

    fn draw_frame(&mut self, state: &RunState) -> io::Result<()> {
        self.frames.push(state.clone());
        Ok(())
    }

    fn draw_game_over(&mut self, score: Score) -> io::Result<()> {
        self.game_overs.push(score);
        Ok(())
    }

    fn pace(&mut self) {
        self.paces += 1;
    }
}

fn key(c: char) -> Input {
    Input::Key(KeyCode::Char(c))
}

fn fixed_config() -> GameConfig {
    GameConfig {
        fps: 60,
        spawn: SpawnPolicy {
            min_interval: 60,
            max_interval: 60,
        },
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn jump_keys() {
    assert!(is_jump_key(KeyCode::Char(' ')));
    assert!(is_jump_key(KeyCode::Up));
    assert!(!is_jump_key(KeyCode::Char('w')));
    assert!(!is_jump_key(KeyCode::Down));
}

#[test]
fn start_screen_choices() {
    assert_eq!(start_choice(key(' ')), Some(Choice::Play));
    assert_eq!(start_choice(Input::QuitSignal), Some(Choice::Quit));
    assert_eq!(start_choice(Input::Key(KeyCode::Esc)), None);
    assert_eq!(start_choice(Input::Key(KeyCode::Up)), None);
    assert_eq!(start_choice(key('r')), None);
}

#[test]
fn game_over_choices() {
    assert_eq!(game_over_choice(key('r')), Some(Choice::Retry));
    assert_eq!(game_over_choice(key('R')), Some(Choice::Retry));
    assert_eq!(game_over_choice(Input::Key(KeyCode::Esc)), Some(Choice::Quit));
    assert_eq!(game_over_choice(Input::QuitSignal), Some(Choice::Quit));
    assert_eq!(game_over_choice(key(' ')), None);
}

// ── Game loop ─────────────────────────────────────────────────────────────────

#[test]
fn play_returns_score_on_collision() {
    let mut fe = Scripted::new(vec![], vec![]);
    let outcome = play(&mut fe, &fixed_config(), &mut rng()).unwrap();
    assert_eq!(outcome, RunOutcome::Collided(Score(805)));
    // The colliding tick is neither drawn nor paced
    assert_eq!(fe.frames.len(), 161);
    assert_eq!(fe.paces, 161);
}

#[test]
fn quit_signal_aborts_run() {
    let mut fe = Scripted::new(vec![], vec![vec![], vec![], vec![Input::QuitSignal]]);
    let outcome = play(&mut fe, &fixed_config(), &mut rng()).unwrap();
    assert_eq!(outcome, RunOutcome::Quit);
    assert_eq!(fe.frames.len(), 2);
}

#[test]
fn repeated_jump_presses_in_one_tick_jump_once() {
    let jump = Input::Key(KeyCode::Char(' '));
    let mut fe = Scripted::new(
        vec![],
        vec![vec![jump, Input::Key(KeyCode::Up), jump], vec![jump]],
    );
    play(&mut fe, &fixed_config(), &mut rng()).unwrap();
    // Second press lands mid-air and is ignored
    assert_eq!(fe.frames[0].player.vy, -14);
    assert_eq!(fe.frames[1].player.vy, -13);
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn full_session_start_play_game_over_quit() {
    let mut fe = Scripted::new(
        vec![key('x'), key(' '), Input::Key(KeyCode::Esc)],
        vec![vec![key(' ')]],
    );
    let scores = run_session(&mut fe, &fixed_config(), &mut rng()).unwrap();

    assert_eq!(scores, vec![Score(805)]);
    assert_eq!(fe.start_screens, 1);
    assert_eq!(fe.game_overs, vec![Score(805)]);

    // Back on the floor by tick 29
    assert!(fe.frames[27].player.airborne);
    assert!(!fe.frames[28].player.airborne);

    // Score climbs by the fixed increment every drawn tick
    for (i, frame) in fe.frames.iter().enumerate() {
        assert_eq!(frame.score, Score(5 * (i as u64 + 1)));
    }
    assert!(fe.waits.is_empty());
}

#[test]
fn retry_goes_back_to_start_screen() {
    let mut fe = Scripted::new(
        vec![key(' '), key('r'), key(' '), Input::QuitSignal],
        vec![],
    );
    let scores = run_session(&mut fe, &fixed_config(), &mut rng()).unwrap();
    assert_eq!(scores, vec![Score(805), Score(805)]);
    assert_eq!(fe.start_screens, 2);
    assert_eq!(fe.game_overs.len(), 2);
}

#[test]
fn quit_on_start_screen_ends_session_immediately() {
    let mut fe = Scripted::new(vec![Input::QuitSignal], vec![]);
    let scores = run_session(&mut fe, &fixed_config(), &mut rng()).unwrap();
    assert!(scores.is_empty());
    assert!(fe.frames.is_empty());
    assert!(fe.game_overs.is_empty());
}

#[test]
fn quit_mid_run_skips_game_over() {
    let mut fe = Scripted::new(vec![key(' ')], vec![vec![], vec![Input::QuitSignal]]);
    let scores = run_session(&mut fe, &fixed_config(), &mut rng()).unwrap();
    assert!(scores.is_empty());
    assert_eq!(fe.frames.len(), 1);
    assert!(fe.game_overs.is_empty());
}

#[test]
fn input_error_propagates() {
    let mut fe = Scripted::new(vec![], vec![]);
    let err = run_session(&mut fe, &fixed_config(), &mut rng()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}
