/// Rendering layer — all terminal I/O lives here.
///
/// `render` translates game state into `Canvas` calls and performs no game
/// logic.  `TerminalCanvas` is the crossterm implementation: it scales the
/// logical pixel surface onto the terminal's character grid.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::GameConfig;
use crate::entities::{Entity, GameState, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::White;
const C_TEXT: Color = Color::White;

const BLOCK: &str = "█";

pub const GAME_OVER_TEXT: &str = "YOU IS DEAD";
pub const RESTART_TEXT: &str = "Press R to restart";

// ── Drawing surface ───────────────────────────────────────────────────────────

/// A fixed-size surface addressed in logical pixels.
pub trait Canvas {
    fn clear(&mut self) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()>;
    /// Draw `text` with its top-left corner at (x, y).
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()>;
    /// Make everything drawn since `clear` visible.
    fn present(&mut self) -> io::Result<()>;
    /// The backing surface changed size.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<C: Canvas>(canvas: &mut C, state: &GameState, cfg: &GameConfig) -> io::Result<()> {
    canvas.clear()?;

    for entity in state.entities() {
        canvas.fill_rect(entity.bounds(), color_of(&entity))?;
    }

    canvas.draw_text(10, 10, &format!("Score: {}", state.score), C_TEXT)?;

    if state.is_over() {
        let x = cfg.screen_width / 2 - 100;
        let y = cfg.screen_height / 2;
        canvas.draw_text(x, y, GAME_OVER_TEXT, C_TEXT)?;
        canvas.draw_text(x, y + 50, RESTART_TEXT, C_TEXT)?;
    }

    canvas.present()
}

fn color_of(entity: &Entity) -> Color {
    match entity {
        Entity::Player(_) => C_PLAYER,
        Entity::Enemy(_) => C_ENEMY,
        Entity::Bullet(_) => C_BULLET,
    }
}

// ── Pixel → cell mapping ──────────────────────────────────────────────────────

/// Cells covered by the logical span `[start, start + len)` when `logical`
/// pixels are spread over `cells` cells.  Partially covered cells count;
/// the result is clipped to the grid and `None` when nothing is visible.
pub fn cell_span(start: i32, len: i32, logical: i32, cells: u16) -> Option<(u16, u16)> {
    if len <= 0 || logical <= 0 || cells == 0 {
        return None;
    }
    let n = i64::from(cells);
    let logical = i64::from(logical);
    let lo = (i64::from(start) * n).div_euclid(logical);
    // ceil(a / b) == floor((a + b - 1) / b) for b > 0
    let hi = ((i64::from(start) + i64::from(len)) * n + logical - 1).div_euclid(logical);

    let lo = lo.max(0);
    let hi = hi.min(n);
    if lo >= hi {
        None
    } else {
        Some((lo as u16, hi as u16))
    }
}

/// The cell containing logical coordinate `v`, possibly off-grid.
fn cell_of(v: i32, logical: i32, cells: u16) -> i64 {
    (i64::from(v) * i64::from(cells)).div_euclid(i64::from(logical.max(1)))
}

// ── crossterm canvas ──────────────────────────────────────────────────────────

pub struct TerminalCanvas<W: Write> {
    out: W,
    width: i32,
    height: i32,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalCanvas<W> {
    /// A canvas of `cfg`'s logical size drawn onto a `cols`×`rows` grid.
    pub fn new(out: W, cfg: &GameConfig, cols: u16, rows: u16) -> Self {
        Self {
            out,
            width: cfg.screen_width,
            height: cfg.screen_height,
            cols,
            rows,
        }
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        let Some((c0, c1)) = cell_span(rect.x, rect.w, self.width, self.cols) else {
            return Ok(());
        };
        let Some((r0, r1)) = cell_span(rect.y, rect.h, self.height, self.rows) else {
            return Ok(());
        };

        self.out.queue(style::SetForegroundColor(color))?;
        let run = BLOCK.repeat(usize::from(c1 - c0));
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&run))?;
        }
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()> {
        let col = cell_of(x, self.width, self.cols);
        let row = cell_of(y, self.height, self.rows);
        if row < 0 || row >= i64::from(self.rows) || col < 0 || col >= i64::from(self.cols) {
            return Ok(());
        }

        // Clip at the right edge.
        let room = (i64::from(self.cols) - col) as usize;
        let visible: String = text.chars().take(room).collect();

        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("canvas resized to {}x{} cells", cols, rows);
        self.cols = cols;
        self.rows = rows;
    }
}
