//! Host tests: switching games and drawing through the terminal canvas.

use canvas_arcade::core::{DrawList, GameModule, MemoryStore};
use canvas_arcade::term::{FrameBuffer, RasterCanvas, Viewport};
use canvas_arcade::types::{GameEvent, GameKind, InputEvent, Key, PieceKind, Rgb};
use canvas_arcade::Arcade;

fn arcade(initial: GameKind) -> Arcade {
    let mut arcade = Arcade::new(21, Box::new(MemoryStore::new()), initial);
    arcade.start();
    arcade
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_input_goes_to_current_game_only() {
    let mut arcade = arcade(GameKind::Tetris);
    arcade.handle_input(InputEvent::key(Key::Char(' ')));
    assert!(arcade.tetris().session().score() > 0);
    assert_eq!(arcade.flappy().session().name_entry().text, "");

    arcade.toggle();
    arcade.handle_input(InputEvent::key(Key::Char('z')));
    assert_eq!(arcade.flappy().session().name_entry().text, "z");
}

#[test]
fn test_switch_back_restarts_game() {
    let mut arcade = arcade(GameKind::Tetris);
    arcade.handle_input(InputEvent::key(Key::Char(' ')));
    arcade.switch_to(GameKind::Flappy);
    arcade.switch_to(GameKind::Tetris);
    assert_eq!(arcade.tetris().session().score(), 0);
    assert!(arcade.module(GameKind::Tetris).is_active());
    assert!(!arcade.module(GameKind::Flappy).is_active());
}

#[test]
fn test_events_are_tagged_by_game() {
    let mut arcade = arcade(GameKind::Tetris);
    arcade.handle_input(InputEvent::key(Key::Char(' ')));
    arcade.toggle();

    let mut events = Vec::new();
    arcade.drain_events(&mut events);
    assert!(events
        .iter()
        .any(|(kind, ev)| *kind == GameKind::Tetris && matches!(ev, GameEvent::PieceLocked { .. })));
    assert!(events.contains(&(GameKind::Tetris, GameEvent::Stopped)));
    assert!(events.contains(&(GameKind::Flappy, GameEvent::Started)));

    events.clear();
    arcade.drain_events(&mut events);
    assert!(events.is_empty());
}

#[test]
fn test_advance_only_moves_current_game() {
    let mut arcade = arcade(GameKind::Flappy);
    arcade.advance(1_000);
    assert_eq!(arcade.tetris().session().drop_timer_ms(), 0);
    assert!(arcade.flappy().session().frames() > 0);
}

#[test]
fn test_flappy_draws_sky_on_canvas() {
    let arcade = arcade(GameKind::Flappy);
    let mut fb = FrameBuffer::new(80, 25);
    {
        let mut canvas = RasterCanvas::with_viewport(&mut fb, Viewport::new(80, 24));
        arcade.draw(&mut canvas);
    }
    let sky = Rgb::new(0x30, 0xc0, 0xdf);
    assert!(fb.cells().iter().any(|c| c.style.bg == sky));
    assert!(screen_text(&fb).contains("TOP 5"));
    // The status row below the viewport is untouched.
    assert_eq!(fb.row_text(24).trim(), "");
}

#[test]
fn test_tetris_draws_hud_and_pieces_on_canvas() {
    let mut arcade = arcade(GameKind::Tetris);
    arcade.handle_input(InputEvent::key(Key::Char(' ')));
    let mut fb = FrameBuffer::new(120, 50);
    {
        let mut canvas = RasterCanvas::new(&mut fb);
        arcade.draw(&mut canvas);
    }
    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("NEXT"));

    let piece_colors: Vec<Rgb> = PieceKind::ALL.iter().map(|k| k.color()).collect();
    assert!(fb.cells().iter().any(|c| piece_colors.contains(&c.style.bg)));
}

#[test]
fn test_draw_list_matches_current_game() {
    let mut arcade = arcade(GameKind::Tetris);
    let mut list = DrawList::new();
    arcade.draw(&mut list);
    assert!(list.has_text("LINES 0"));

    arcade.toggle();
    list.clear_commands();
    arcade.draw(&mut list);
    assert!(list.has_text("Enter Name: "));
}
