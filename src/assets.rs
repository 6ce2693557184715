//! Text sprites loaded from disk once at startup.
//!
//! A sprite file is plain text: one line per row, spaces are transparent.
//! Each sprite is rescaled to its on-screen cell size with nearest-neighbour
//! sampling, so the art files can be drawn at any resolution.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::constants::{
    CELL_HEIGHT, CELL_WIDTH, OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

pub const PLAYER_FILE: &str = "dino.txt";
pub const OBSTACLE_FILE: &str = "tree.txt";
pub const BACKGROUND_FILE: &str = "desert.txt";

#[derive(Debug)]
pub enum AssetError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed reading sprite {}: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "sprite {} has no visible cells", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

// ── Sprite ────────────────────────────────────────────────────────────────────

/// Rectangular grid of cells; `None` is transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Sprite {
    /// Parse sprite text.  Ragged lines are padded with transparent cells;
    /// returns `None` when the art contains nothing visible.
    pub fn parse(text: &str) -> Option<Sprite> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end()).collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if width == 0 || height == 0 {
            return None;
        }

        let mut cells = vec![None; width * height];
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    cells[row * width + col] = Some(ch);
                }
            }
        }
        Some(Sprite {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// Nearest-neighbour resample to `width × height` cells.
    pub fn scaled(&self, width: usize, height: usize) -> Sprite {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            let src_row = row * self.height / height;
            for col in 0..width {
                let src_col = col * self.width / width;
                cells.push(self.cells[src_row * self.width + src_col]);
            }
        }
        Sprite {
            width,
            height,
            cells,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Cells needed to cover `pixels`, rounding up so nothing is cropped.
fn cells_for(pixels: i32, cell: i32) -> usize {
    ((pixels + cell - 1) / cell).max(1) as usize
}

/// Read a sprite file and scale it to cover `w × h` pixels.
pub fn load_sprite(path: &Path, w: i32, h: i32) -> Result<Sprite, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sprite = Sprite::parse(&text).ok_or_else(|| AssetError::Empty {
        path: path.to_path_buf(),
    })?;
    Ok(sprite.scaled(cells_for(w, CELL_WIDTH), cells_for(h, CELL_HEIGHT)))
}

/// The three images the game draws.
#[derive(Clone, Debug)]
pub struct Assets {
    pub player: Sprite,
    pub obstacle: Sprite,
    pub background: Sprite,
}

impl Assets {
    pub fn load(dir: &Path) -> Result<Assets, AssetError> {
        let player = load_sprite(&dir.join(PLAYER_FILE), PLAYER_WIDTH, PLAYER_HEIGHT)?;
        let obstacle = load_sprite(&dir.join(OBSTACLE_FILE), OBSTACLE_WIDTH, OBSTACLE_HEIGHT)?;
        let background = load_sprite(&dir.join(BACKGROUND_FILE), SCREEN_WIDTH, SCREEN_HEIGHT)?;
        info!("loaded sprites from {}", dir.display());
        Ok(Assets {
            player,
            obstacle,
            background,
        })
    }
}
