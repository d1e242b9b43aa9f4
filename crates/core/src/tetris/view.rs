//! Tetris draw pass.
//!
//! Reads a session and issues primitives; never mutates game state.

use crate::render::Renderer;
use crate::tetris::session::{Piece, TetrisSession};
use crate::types::{Rgb, TextAlign, BOARD_HEIGHT, BOARD_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH};

const BACKGROUND: Rgb = Rgb::new(0x0b, 0x0f, 0x1f);
const FRAME: Rgb = Rgb::new(0x00, 0xff, 0xff);
const GRID: Rgb = Rgb::new(0x1a, 0x1e, 0x2e);
const HUD: Rgb = Rgb::new(0xe6, 0xf7, 0xff);
const OVERLAY: Rgb = Rgb::new(0x00, 0xf0, 0xff);
const OVERLAY_GAME_OVER: Rgb = Rgb::new(0xff, 0x52, 0x77);

const PREVIEW_CELL: f32 = 8.0;

/// Cell edge in surface units: the grid fits within 92% of the surface.
pub fn cell_size() -> f32 {
    (SURFACE_WIDTH * 0.92 / BOARD_WIDTH as f32)
        .min(SURFACE_HEIGHT * 0.92 / BOARD_HEIGHT as f32)
        .floor()
}

pub fn grid_left() -> f32 {
    ((SURFACE_WIDTH - BOARD_WIDTH as f32 * cell_size()) / 2.0).floor()
}

pub fn grid_top() -> f32 {
    ((SURFACE_HEIGHT - BOARD_HEIGHT as f32 * cell_size()) / 2.0).floor()
}

pub fn draw(session: &TetrisSession, active: bool, out: &mut dyn Renderer) {
    let cell = cell_size();
    let left = grid_left();
    let top = grid_top();

    out.clear(BACKGROUND);
    out.stroke_rect(
        left - 2.0,
        top - 2.0,
        BOARD_WIDTH as f32 * cell + 4.0,
        BOARD_HEIGHT as f32 * cell + 4.0,
        FRAME,
    );

    let board = session.board();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            let px = left + x as f32 * cell;
            let py = top + y as f32 * cell;
            match board.get(x, y).flatten() {
                Some(kind) => draw_cell(out, px, py, cell, kind.color()),
                None => out.stroke_rect(px, py, cell, cell, GRID),
            }
        }
    }

    if !session.game_over() {
        draw_piece(out, session.piece(), left, top, cell);
    }

    draw_hud(session, out);

    if session.paused() {
        center_text(out, "PAUSED", OVERLAY);
    } else if session.game_over() {
        center_text(out, "GAME OVER - R to Reset", OVERLAY_GAME_OVER);
    } else if !active {
        center_text(out, "TETRIS - Press any key", OVERLAY);
    }
}

fn draw_piece(out: &mut dyn Renderer, piece: &Piece, left: f32, top: f32, cell: f32) {
    for &(dx, dy) in piece.shape.minos().iter() {
        let x = piece.x + dx;
        let y = piece.y + dy;
        if y >= 0 {
            draw_cell(
                out,
                left + x as f32 * cell,
                top + y as f32 * cell,
                cell,
                piece.kind.color(),
            );
        }
    }
}

fn draw_cell(out: &mut dyn Renderer, x: f32, y: f32, cell: f32, color: Rgb) {
    out.fill_rect(x + 1.0, y + 1.0, cell - 2.0, cell - 2.0, color);
}

fn draw_hud(session: &TetrisSession, out: &mut dyn Renderer) {
    out.text(8.0, 8.0, &format!("SCORE {}", session.score()), TextAlign::Left, HUD);
    out.text(8.0, 26.0, &format!("LINES {}", session.lines()), TextAlign::Left, HUD);
    out.text(8.0, 44.0, &format!("LVL   {}", session.level()), TextAlign::Left, HUD);

    let right = SURFACE_WIDTH - 8.0;
    out.text(right, 8.0, "NEXT", TextAlign::Right, HUD);
    let next = session.next();
    let origin_x = right - next.shape.cols() as f32 * PREVIEW_CELL;
    for &(dx, dy) in next.shape.minos().iter() {
        out.fill_rect(
            origin_x + dx as f32 * PREVIEW_CELL,
            26.0 + dy as f32 * PREVIEW_CELL,
            PREVIEW_CELL - 1.0,
            PREVIEW_CELL - 1.0,
            next.kind.color(),
        );
    }
}

fn center_text(out: &mut dyn Renderer, msg: &str, color: Rgb) {
    out.text(
        SURFACE_WIDTH / 2.0,
        SURFACE_HEIGHT / 2.0,
        msg,
        TextAlign::Center,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};
    use crate::tetris::session::TetrisAction;
    use crate::types::PieceKind;

    #[test]
    fn grid_geometry_matches_surface() {
        assert_eq!(cell_size(), 19.0);
        assert_eq!(grid_left(), 43.0);
        assert_eq!(grid_top(), 17.0);
    }

    #[test]
    fn hud_shows_counters_and_next() {
        let mut s = TetrisSession::new(3);
        s.set_next(PieceKind::Z);
        let mut list = DrawList::new();
        draw(&s, true, &mut list);
        assert!(list.has_text("SCORE 0"));
        assert!(list.has_text("LINES 0"));
        assert!(list.has_text("LVL   1"));
        assert!(list.has_text("NEXT"));
        let z_cells = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { color, .. } if *color == PieceKind::Z.color()))
            .count();
        assert!(z_cells >= 4);
    }

    #[test]
    fn pause_overlay() {
        let mut s = TetrisSession::new(3);
        s.apply(TetrisAction::Pause);
        let mut list = DrawList::new();
        draw(&s, true, &mut list);
        assert!(list.has_text("PAUSED"));
    }

    #[test]
    fn locked_cells_are_filled() {
        let mut s = TetrisSession::new(3);
        s.board_mut().set(0, 19, Some(PieceKind::L));
        let mut list = DrawList::new();
        draw(&s, true, &mut list);
        let expected = DrawCommand::Fill {
            x: 43.0 + 1.0,
            y: 17.0 + 19.0 * 19.0 + 1.0,
            w: 17.0,
            h: 17.0,
            color: PieceKind::L.color(),
        };
        assert!(list.commands().contains(&expected));
    }
}
