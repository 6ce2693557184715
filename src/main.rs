use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use env_logger::{Env, Target};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dino_run::assets::Assets;
use dino_run::clock::FrameClock;
use dino_run::config::{Cli, GameConfig};
use dino_run::display::{compose_frame, compose_game_over, compose_start, Canvas};
use dino_run::entities::{RunState, Score};
use dino_run::session::{run_session, Frontend, Input};

// ── Terminal context ──────────────────────────────────────────────────────────

/// Everything built once at startup: the output surface, the sprites and the
/// frame clock.
struct TerminalContext<W: Write> {
    out: W,
    assets: Assets,
    canvas: Canvas,
    clock: FrameClock,
}

/// Map a raw terminal event to game input.  Only key presses count; Ctrl+C
/// stands in for closing the window.
fn translate(event: Event) -> Option<Input> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => {
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                Some(Input::QuitSignal)
            } else {
                Some(Input::Key(code))
            }
        }
        _ => None,
    }
}

impl<W: Write> Frontend for TerminalContext<W> {
    fn poll_inputs(&mut self) -> std::io::Result<Vec<Input>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = translate(event::read()?) {
                inputs.push(input);
            }
        }
        Ok(inputs)
    }

    fn wait_input(&mut self) -> std::io::Result<Input> {
        loop {
            if let Some(input) = translate(event::read()?) {
                return Ok(input);
            }
        }
    }

    fn draw_start(&mut self) -> std::io::Result<()> {
        compose_start(&mut self.canvas);
        self.canvas.present(&mut self.out)
    }

    fn draw_frame(&mut self, state: &RunState) -> std::io::Result<()> {
        compose_frame(&mut self.canvas, &self.assets, state);
        self.canvas.present(&mut self.out)
    }

    fn draw_game_over(&mut self, score: Score) -> std::io::Result<()> {
        compose_game_over(&mut self.canvas, score);
        self.canvas.present(&mut self.out)
    }

    fn pace(&mut self) {
        self.clock.wait();
    }

    fn reset_clock(&mut self) {
        self.clock.reset();
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs go to a file.  Without one,
/// stderr is used only when RUST_LOG is set explicitly.
fn init_logging(cli: &Cli) -> Result<()> {
    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed opening log file {}", path.display()))?;
            env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config()?;
    // Missing art is fatal before the terminal is touched.
    let assets = Assets::load(&cli.assets)
        .with_context(|| format!("failed loading sprites from {}", cli.assets.display()))?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut ctx = TerminalContext {
        out: BufWriter::new(stdout()),
        assets,
        canvas: Canvas::default(),
        clock: FrameClock::new(config.fps),
    };

    let result = run(&mut ctx, &config, &mut rng);
    // Always restore the terminal
    leave_terminal(&mut ctx.out);

    let scores = result?;
    log::info!(
        "session over after {} runs, best {}",
        scores.len(),
        scores.iter().max().map(Score::points).unwrap_or(0)
    );
    Ok(())
}

fn run<W: Write>(
    ctx: &mut TerminalContext<W>,
    config: &GameConfig,
    rng: &mut StdRng,
) -> Result<Vec<Score>> {
    terminal::enable_raw_mode().context("failed enabling raw mode")?;
    ctx.out.execute(terminal::EnterAlternateScreen)?;
    ctx.out.execute(cursor::Hide)?;
    Ok(run_session(ctx, config, rng)?)
}

fn leave_terminal<W: Write>(out: &mut W) {
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}
