//! Rendering layer. All terminal output lives here.
//!
//! Each screen is composed into a [`Canvas`] first (so sprites can be clipped
//! against the edges and layered), then presented with one `MoveTo` + `Print`
//! per row.  No game logic is performed; this module only translates state
//! into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::assets::{Assets, Sprite};
use crate::constants::{CELL_HEIGHT, CELL_WIDTH, COLUMNS, ROWS, SCREEN_HEIGHT};
use crate::entities::{RunState, Score};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::Green;
const C_OBSTACLE: Color = Color::DarkGreen;
const C_TEXT: Color = Color::White;
const C_SCORE: Color = Color::Yellow;
const C_GAME_OVER: Color = Color::Red;

// ── Pixel → cell projection ───────────────────────────────────────────────────

pub fn px_to_col(x: i32) -> i32 {
    x.div_euclid(CELL_WIDTH)
}

pub fn px_to_row(y: i32) -> i32 {
    y.div_euclid(CELL_HEIGHT)
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Off-screen frame buffer the size of the play surface.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(COLUMNS, ROWS)
    }
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas {
            width,
            height,
            cells: vec![BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.cells[row as usize * self.width as usize + col as usize] = Cell { ch, color };
    }

    /// Draw the opaque cells of `sprite` with its top-left at `(col, row)`,
    /// clipping whatever falls outside.
    pub fn blit(&mut self, sprite: &Sprite, col: i32, row: i32, color: Color) {
        for dy in 0..sprite.height() {
            for dx in 0..sprite.width() {
                if let Some(ch) = sprite.cell(dx, dy) {
                    self.put(col + dx as i32, row + dy as i32, ch, color);
                }
            }
        }
    }

    pub fn text(&mut self, col: i32, row: i32, s: &str, color: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }

    /// Text horizontally centred on the surface.
    pub fn centered_text(&mut self, row: i32, s: &str, color: Color) {
        let col = (self.width as i32 - s.chars().count() as i32) / 2;
        self.text(col, row, s, color);
    }

    /// The characters of one row, colours dropped.
    pub fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }

    /// Write the whole buffer to the terminal and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        for row in 0..self.height {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.width as usize;
            let mut color = None;
            for cell in &self.cells[start..start + self.width as usize] {
                if color != Some(cell.color) {
                    out.queue(style::SetForegroundColor(cell.color))?;
                    color = Some(cell.color);
                }
                out.queue(Print(cell.ch))?;
            }
        }

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

/// Compose one gameplay frame: backdrop tiles, obstacles, player, score.
pub fn compose_frame(canvas: &mut Canvas, assets: &Assets, state: &RunState) {
    *canvas = Canvas::new(canvas.width, canvas.height);

    let bg = &state.background;
    canvas.blit(&assets.background, px_to_col(bg.x1), 0, C_BACKGROUND);
    canvas.blit(&assets.background, px_to_col(bg.x2), 0, C_BACKGROUND);

    for obstacle in &state.obstacles {
        canvas.blit(
            &assets.obstacle,
            px_to_col(obstacle.x),
            px_to_row(obstacle.y),
            C_OBSTACLE,
        );
    }

    let p = &state.player;
    canvas.blit(&assets.player, px_to_col(p.x), px_to_row(p.y), C_PLAYER);

    canvas.text(
        px_to_col(10),
        px_to_row(10),
        &format!("Score: {}", state.score.points()),
        C_SCORE,
    );
}

pub fn compose_start(canvas: &mut Canvas) {
    *canvas = Canvas::new(canvas.width, canvas.height);
    canvas.centered_text(px_to_row(SCREEN_HEIGHT / 2), "Press SPACE to Start", C_TEXT);
}

pub fn compose_game_over(canvas: &mut Canvas, score: Score) {
    *canvas = Canvas::new(canvas.width, canvas.height);
    let mid = SCREEN_HEIGHT / 2;
    canvas.centered_text(px_to_row(mid - 30), "Game Over", C_GAME_OVER);
    canvas.centered_text(
        px_to_row(mid),
        &format!("Your Score: {}", score.points()),
        C_SCORE,
    );
    canvas.centered_text(
        px_to_row(mid + 30),
        "Press R to Retry or ESC to Quit",
        C_TEXT,
    );
}
