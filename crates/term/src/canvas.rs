//! Framebuffer-backed drawing surfaces.
//!
//! [`BoardSurface`] turns the simulation's pixel-space draw calls into
//! terminal cells (2 columns by 1 row per block) inside a border, with a
//! score line underneath. It is pure and unit-tested. [`TerminalCanvas`]
//! pairs it with a [`TerminalRenderer`] to put frames on screen.

use anyhow::Result;

use crate::core::{GameState, Surface};
use crate::engine::Canvas;
use crate::fb::{CellStyle, FrameBuffer};
use crate::renderer::TerminalRenderer;
use crate::types::{Color, BLACK, BLOCK_SIZE, WHITE};

/// Rows below the border reserved for the score line and status.
pub const HUD_ROWS: u16 = 2;

const BACKGROUND: CellStyle = CellStyle::new(Color::new(80, 80, 90), BLACK);
const BORDER: CellStyle = CellStyle::new(Color::new(200, 200, 200), BLACK);
const BLOCK_GLYPH: char = '█';

pub struct BoardSurface {
    fb: FrameBuffer,
    cell_w: u16,
    cell_h: u16,
    /// Play area size in blocks, from the latest clear
    cols: u16,
    rows: u16,
}

impl Default for BoardSurface {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl BoardSurface {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            cols: 0,
            rows: 0,
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Terminal cell holding the top-left of block (`col`, `row`)
    pub fn block_origin(&self, col: u16, row: u16) -> (u16, u16) {
        (
            1u16.saturating_add(col.saturating_mul(self.cell_w)),
            1u16.saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    /// Score line, plus a game-over banner once the session has ended.
    pub fn draw_hud(&mut self, score: u32, game_over: bool) {
        let y = self.rows.saturating_mul(self.cell_h).saturating_add(2);
        let label = CellStyle::default();
        self.fb.put_str(0, y, "SCORE ", label);
        self.fb.put_u32(6, y, score, CellStyle::new(WHITE, BLACK).bold());
        if game_over {
            self.fb
                .put_str(0, y + 1, "GAME OVER", CellStyle::new(WHITE, BLACK).bold());
        } else {
            self.fb.put_str(0, y + 1, "q: quit", label.dim());
        }
    }

    fn draw_border(&mut self) {
        let w = self.fb.width();
        let h = self.rows.saturating_mul(self.cell_h).saturating_add(2);
        if w < 2 || h < 2 {
            return;
        }
        let right = w - 1;
        let bottom = h - 1;

        self.fb.put_char(0, 0, '┌', BORDER);
        self.fb.put_char(right, 0, '┐', BORDER);
        self.fb.put_char(0, bottom, '└', BORDER);
        self.fb.put_char(right, bottom, '┘', BORDER);
        for x in 1..right {
            self.fb.put_char(x, 0, '─', BORDER);
            self.fb.put_char(x, bottom, '─', BORDER);
        }
        for y in 1..bottom {
            self.fb.put_char(0, y, '│', BORDER);
            self.fb.put_char(right, y, '│', BORDER);
        }
    }
}

fn blocks(px: u32) -> u16 {
    u16::try_from(px / BLOCK_SIZE).unwrap_or(u16::MAX)
}

/// Blocks spanned by a pixel range, rounding partial blocks outward
fn block_span(start: u32, len: u32) -> (u16, u16) {
    let end = start.saturating_add(len);
    let first = blocks(start);
    let last = blocks(end.saturating_add(BLOCK_SIZE - 1));
    (first, last.saturating_sub(first))
}

impl Surface for BoardSurface {
    fn clear_surface(&mut self, width: u32, height: u32) {
        self.cols = blocks(width);
        self.rows = blocks(height);

        let inner_w = self.cols.saturating_mul(self.cell_w);
        let inner_h = self.rows.saturating_mul(self.cell_h);
        self.fb.resize(
            inner_w.saturating_add(2),
            inner_h.saturating_add(2).saturating_add(HUD_ROWS),
        );
        self.fb.clear(CellStyle::default().into_cell(' '));
        self.fb.fill_rect(1, 1, inner_w, inner_h, ' ', BACKGROUND);
        self.draw_border();
    }

    fn draw_rect(&mut self, color: Color, x: u32, y: u32, width: u32, height: u32) {
        let (col, cols) = block_span(x, width);
        let (row, rows) = block_span(y, height);
        // Clip to the play area so the border stays intact
        let cols = cols.min(self.cols.saturating_sub(col));
        let rows = rows.min(self.rows.saturating_sub(row));
        if cols == 0 || rows == 0 {
            return;
        }

        let (cx, cy) = self.block_origin(col, row);
        self.fb.fill_rect(
            cx,
            cy,
            cols.saturating_mul(self.cell_w),
            rows.saturating_mul(self.cell_h),
            BLOCK_GLYPH,
            CellStyle::new(color, BLACK),
        );
    }
}

/// On-screen canvas: draws into a [`BoardSurface`] and flushes each
/// presented frame through a [`TerminalRenderer`].
pub struct TerminalCanvas {
    surface: BoardSurface,
    renderer: TerminalRenderer,
    entered: bool,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self {
            surface: BoardSurface::default(),
            renderer: TerminalRenderer::new(),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.renderer.exit()
    }

    pub fn surface(&self) -> &BoardSurface {
        &self.surface
    }
}

impl Default for TerminalCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalCanvas {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Surface for TerminalCanvas {
    fn clear_surface(&mut self, width: u32, height: u32) {
        self.surface.clear_surface(width, height);
    }

    fn draw_rect(&mut self, color: Color, x: u32, y: u32, width: u32, height: u32) {
        self.surface.draw_rect(color, x, y, width, height);
    }
}

impl Canvas for TerminalCanvas {
    fn present(&mut self, game: &GameState) -> Result<()> {
        self.surface.draw_hud(game.score(), game.is_game_over());
        // The swapped-in buffer is stale; the next clear overwrites it
        self.renderer.draw_swap(self.surface.framebuffer_mut())
    }
}
