//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{stage_progress, GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

/// Where the board frame lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Board cell height in rows; width is twice this in columns.
    pub cell: u16,
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    pub fn new(viewport: Viewport, board_size: i16) -> Self {
        let cell = cell_size(viewport, board_size);
        let n = board_size.max(0) as u16;
        let frame_w = n.saturating_mul(cell * 2).saturating_add(2);
        let frame_h = n.saturating_mul(cell).saturating_add(2);
        Self {
            cell,
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Top-left terminal cell of a board position.
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        let px = self.x + 1 + (pos.x.max(0) as u16) * self.cell * 2;
        let py = self.y + 1 + (pos.y.max(0) as u16) * self.cell;
        (px, py)
    }
}

/// Board cell size for a viewport.
///
/// `min(floor(w * 0.8 / n / 2), floor(h * 0.6 / n))`, at least 1. Columns are
/// halved because each board cell is drawn two columns wide.
pub fn cell_size(viewport: Viewport, board_size: i16) -> u16 {
    let n = board_size.max(1) as u32;
    let by_width = (viewport.width as u32 * 4) / (10 * n);
    let by_height = (viewport.height as u32 * 3) / (5 * n);
    by_width.min(by_height).clamp(1, u16::MAX as u32) as u16
}

const PANEL_MIN_W: u16 = 12;
const PROGRESS_W: u16 = 12;

const BOARD_BG: Rgb = Rgb::new(18, 26, 20);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(170, 200, 170), PANEL_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(60, 80, 60), BOARD_BG).dim();
const HEAD: CellStyle = CellStyle::new(Rgb::new(150, 255, 150), BOARD_BG).bold();
const HEAD_DEAD: CellStyle = CellStyle::new(Rgb::new(230, 90, 90), BOARD_BG).bold();
const BODY: CellStyle = CellStyle::new(Rgb::new(60, 180, 90), BOARD_BG);
const FOOD: CellStyle = CellStyle::new(Rgb::new(240, 80, 80), BOARD_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const BAR: CellStyle = CellStyle::new(Rgb::new(90, 200, 110), PANEL_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

pub const HEAD_GLYPH: char = '█';
pub const BODY_GLYPH: char = '▓';
pub const FOOD_GLYPH: char = '●';
pub const EMPTY_GLYPH: char = '·';

/// A lightweight terminal renderer for the Snake game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Allocation-free once the framebuffer has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = BoardLayout::new(viewport, snap.board_size);
        self.draw_board(fb, snap, &layout);
        self.draw_side_panel(fb, snap, viewport, &layout);
        self.draw_overlay(fb, snap, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        fb.draw_box(layout.x, layout.y, layout.frame_w, layout.frame_h, BORDER);

        for y in 0..snap.board_size {
            for x in 0..snap.board_size {
                self.fill_cell(fb, layout, Position::new(x, y), EMPTY_GLYPH, EMPTY);
            }
        }

        if let Some(food) = snap.food {
            self.fill_cell(fb, layout, food, FOOD_GLYPH, FOOD);
        }

        for &segment in snap.snake.iter().skip(1) {
            self.fill_cell(fb, layout, segment, BODY_GLYPH, BODY);
        }
        if let Some(head) = snap.head() {
            let style = if snap.game_over && !snap.board_full {
                HEAD_DEAD
            } else {
                HEAD
            };
            self.fill_cell(fb, layout, head, HEAD_GLYPH, style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let (px, py) = layout.cell_origin(pos);
        fb.fill_rect(px, py, layout.cell * 2, layout.cell, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }
        let panel_w = viewport.width - panel_x;

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, VALUE);
        y += 2;

        fb.put_str(panel_x, y, "STAGE", LABEL);
        y += 1;
        fb.put_u32(panel_x, y, snap.stage.stage, VALUE);
        y += 1;
        self.draw_progress(fb, panel_x, y, panel_w.min(PROGRESS_W), snap);
        y += 1;
        if snap.score >= snap.stage.required_score {
            fb.put_str(panel_x, y, "MAX STAGE", VALUE.dim());
        } else {
            let x = fb.put_u32(panel_x, y, snap.score, VALUE);
            let x = fb.put_str(x, y, " / ", VALUE);
            fb.put_u32(x, y, snap.stage.required_score, VALUE);
        }
        y += 2;

        fb.put_str(panel_x, y, "SPEED", LABEL);
        y += 1;
        let x = fb.put_str(panel_x, y, snap.difficulty.as_str(), VALUE);
        if panel_w >= 18 {
            let x = fb.put_str(x, y, " ", VALUE);
            let x = fb.put_u32(x, y, snap.interval_ms, VALUE.dim());
            fb.put_str(x, y, "ms", VALUE.dim());
        }
        y += 2;

        if matches!(snap.phase(), Phase::Paused | Phase::GameOver) {
            fb.put_str(panel_x, y, "HIGH SCORES", LABEL);
            y += 1;
            for (rank, &score) in snap.high_scores.as_slice().iter().enumerate() {
                if y >= viewport.height {
                    break;
                }
                let x = fb.put_u32(panel_x, y, rank as u32 + 1, VALUE.dim());
                let x = fb.put_str(x, y, ". ", VALUE.dim());
                fb.put_u32(x, y, score, VALUE);
                y += 1;
            }
        }
    }

    fn draw_progress(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, snap: &GameSnapshot) {
        if w < 3 {
            return;
        }
        let inner = w - 2;
        let filled = (stage_progress(snap.score) * inner as f32).round() as u16;
        fb.put_char(x, y, '[', VALUE);
        for i in 0..inner {
            let (ch, style) = if i < filled {
                ('█', BAR)
            } else {
                ('░', VALUE.dim())
            };
            fb.put_char(x + 1 + i, y, ch, style);
        }
        fb.put_char(x + 1 + inner, y, ']', VALUE);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let (title, hint) = if snap.board_full {
            ("BOARD CLEARED", "R TO RESTART")
        } else {
            match snap.phase() {
                Phase::NotStarted => ("PRESS AN ARROW KEY", "OR SWIPE TO START"),
                Phase::Paused => ("PAUSED", "SPACE TO RESUME"),
                Phase::GameOver => ("GAME OVER", "R TO RESTART"),
                Phase::Running => return,
            }
        };

        let y = layout.y.saturating_add(layout.frame_h / 3);
        fb.put_str_centered(layout.x, y, layout.frame_w, title, OVERLAY);
        fb.put_str_centered(layout.x, y.saturating_add(1), layout.frame_w, hint, OVERLAY.dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::Direction;

    fn find_row(fb: &FrameBuffer, text: &str) -> Option<u16> {
        (0..fb.height()).find(|&y| fb.row_text(y).contains(text))
    }

    #[test]
    fn cell_size_follows_viewport() {
        assert_eq!(cell_size(Viewport::new(80, 24), 20), 1);
        assert_eq!(cell_size(Viewport::new(400, 120), 20), 3);
        assert_eq!(cell_size(Viewport::new(400, 40), 20), 1);
        assert_eq!(cell_size(Viewport::new(0, 0), 20), 1);
    }

    #[test]
    fn layout_centers_frame() {
        let layout = BoardLayout::new(Viewport::new(80, 24), 20);
        assert_eq!(layout.frame_w, 42);
        assert_eq!(layout.frame_h, 22);
        assert_eq!((layout.x, layout.y), (19, 1));
        assert_eq!(layout.cell_origin(Position::new(0, 0)), (20, 2));
        assert_eq!(layout.cell_origin(Position::new(3, 2)), (26, 4));
    }

    #[test]
    fn draws_border_head_body_and_food() {
        let mut state = GameState::new(1);
        state.start();
        state.set_layout(
            &[Position::new(5, 5), Position::new(4, 5)],
            Direction::Right,
            Some(Position::new(8, 9)),
        );
        let viewport = Viewport::new(80, 24);
        let fb = GameView::new().render(&state.snapshot(), viewport);
        let layout = BoardLayout::new(viewport, 20);

        assert_eq!(fb.get(layout.x, layout.y).map(|c| c.ch), Some('┌'));

        let (hx, hy) = layout.cell_origin(Position::new(5, 5));
        assert_eq!(fb.get(hx, hy).map(|c| c.ch), Some(HEAD_GLYPH));
        assert_eq!(fb.get(hx + 1, hy).map(|c| c.ch), Some(HEAD_GLYPH));

        let (bx, by) = layout.cell_origin(Position::new(4, 5));
        assert_eq!(fb.get(bx, by).map(|c| c.ch), Some(BODY_GLYPH));

        let (fx, fy) = layout.cell_origin(Position::new(8, 9));
        assert_eq!(fb.get(fx, fy).map(|c| c.ch), Some(FOOD_GLYPH));

        let (ex, ey) = layout.cell_origin(Position::new(0, 0));
        assert_eq!(fb.get(ex, ey).map(|c| c.ch), Some(EMPTY_GLYPH));
    }

    #[test]
    fn panel_shows_score_stage_and_speed() {
        let state = GameState::new(1);
        let fb = GameView::new().render(&state.snapshot(), Viewport::new(80, 24));

        assert!(find_row(&fb, "SCORE").is_some());
        assert!(find_row(&fb, "STAGE").is_some());
        assert!(find_row(&fb, "0 / 5").is_some());
        assert!(find_row(&fb, "MEDIUM").is_some());
        assert!(find_row(&fb, "HIGH SCORES").is_none());
    }

    #[test]
    fn start_hint_before_first_move() {
        let state = GameState::new(1);
        let fb = GameView::new().render(&state.snapshot(), Viewport::new(80, 24));
        assert!(find_row(&fb, "PRESS AN ARROW KEY").is_some());
    }

    #[test]
    fn paused_overlay_and_high_scores() {
        let mut state = GameState::new(1);
        state.start();
        state.toggle_pause();
        let fb = GameView::new().render(&state.snapshot(), Viewport::new(80, 24));
        assert!(find_row(&fb, "PAUSED").is_some());
        assert!(find_row(&fb, "HIGH SCORES").is_some());
        assert!(find_row(&fb, "1. 0").is_some());
    }

    #[test]
    fn game_over_and_board_cleared_overlays() {
        let mut snap = GameState::new(1).snapshot();
        snap.started = true;
        snap.game_over = true;
        let fb = GameView::new().render(&snap, Viewport::new(80, 24));
        assert!(find_row(&fb, "GAME OVER").is_some());

        snap.board_full = true;
        let fb = GameView::new().render(&snap, Viewport::new(80, 24));
        assert!(find_row(&fb, "BOARD CLEARED").is_some());
        assert!(find_row(&fb, "GAME OVER").is_none());
    }

    #[test]
    fn final_stage_shows_max() {
        let mut snap = GameState::new(1).snapshot();
        snap.score = 25;
        snap.stage = crate::core::stage_for(25);
        let fb = GameView::new().render(&snap, Viewport::new(80, 24));
        assert!(find_row(&fb, "MAX STAGE").is_some());
        assert!(find_row(&fb, "[██████████]").is_some());
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = GameState::new(1);
        let view = GameView::new();
        let mut fb = FrameBuffer::new(0, 0);
        for (w, h) in [(0, 0), (1, 1), (10, 5), (43, 3)] {
            view.render_into(&state.snapshot(), Viewport::new(w, h), &mut fb);
            assert_eq!((fb.width(), fb.height()), (w, h));
        }
    }
}
