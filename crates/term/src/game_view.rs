//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The board is drawn centered in
//! the viewport inside an open-top box: two side walls and a bottom edge,
//! leaving the top open where pieces spawn half-outside the field.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Shape, FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Maps game snapshots into framebuffers.
pub struct GameView {
    /// Board cell width in terminal columns.
    ///
    /// 2x1 compensates for the typical terminal glyph aspect ratio.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render a snapshot into an existing framebuffer, resizing it to the
    /// viewport. Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_w = FIELD_WIDTH as u16 * self.cell_w;
        let board_h = FIELD_HEIGHT as u16;
        // Walls on both sides, bottom edge below.
        let start_x = viewport.width.saturating_sub(board_w + 2) / 2;
        let start_y = viewport.height.saturating_sub(board_h + 1) / 2;

        self.draw_box(fb, start_x, start_y, board_w, board_h);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(shape) = cell {
                    self.draw_cell(fb, start_x, start_y, x as u16, y as u16, *shape);
                }
            }
        }

        // Active piece, clipped to the visible field.
        for &(x, y) in snap.active.cells.iter() {
            if x >= 0 && x < FIELD_WIDTH as i8 && y >= 0 && y < FIELD_HEIGHT as i8 {
                self.draw_cell(fb, start_x, start_y, x as u16, y as u16, snap.active.shape);
            }
        }
    }

    /// Open-top box: side walls and a bottom edge with corners.
    fn draw_box(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, board_w: u16, board_h: u16) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        for y in 0..board_h {
            fb.put_char(x0, y0 + y, '║', border);
            fb.put_char(x0 + board_w + 1, y0 + y, '║', border);
        }
        fb.put_char(x0, y0 + board_h, '╚', border);
        fb.put_char(x0 + board_w + 1, y0 + board_h, '╝', border);
        for x in 0..board_w {
            fb.put_char(x0 + 1 + x, y0 + board_h, '═', border);
        }
    }

    /// One board cell as `cell_w` columns of shape-colored block.
    fn draw_cell(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: u16, y: u16, shape: Shape) {
        let color = shape_color(shape);
        let style = CellStyle::new(color, color);
        fb.fill_rect(x0 + 1 + x * self.cell_w, y0 + y, self.cell_w, 1, '█', style);
    }
}

fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::O => Rgb::new(220, 200, 60),
        Shape::Z => Rgb::new(200, 70, 70),
        Shape::S => Rgb::new(80, 190, 90),
        Shape::I => Rgb::new(70, 190, 200),
        Shape::T => Rgb::new(160, 90, 200),
        Shape::L => Rgb::new(220, 140, 60),
        Shape::J => Rgb::new(80, 110, 220),
    }
}
