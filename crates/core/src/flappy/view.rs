//! Flappy draw pass: sky, background, pipes, bird, ground, then UI on top.

use crate::flappy::session::{FlappySession, FlappyState};
use crate::render::Renderer;
use crate::types::{Rgb, Sprite, TextAlign, PIPE_GAP, SURFACE_HEIGHT, SURFACE_WIDTH};

const SKY: Rgb = Rgb::new(0x30, 0xc0, 0xdf);
const TEXT: Rgb = Rgb::new(0xff, 0xff, 0xff);

const PROMPT: &str = "Type name, then press Enter";
const LINE_HEIGHT: f32 = 18.0;

pub fn draw(session: &FlappySession, out: &mut dyn Renderer) {
    let m = session.metrics();

    out.clear(SKY);
    out.sprite(
        Sprite::Background,
        0.0,
        SURFACE_HEIGHT - m.background.h,
        m.background.w,
        m.background.h,
        0.0,
    );

    for pipe in session.pipes().iter() {
        out.sprite(Sprite::PipeTop, pipe.x, pipe.y, m.pipe.w, m.pipe.h, 0.0);
        out.sprite(
            Sprite::PipeBottom,
            pipe.x,
            pipe.y + m.pipe.h + PIPE_GAP,
            m.pipe.w,
            m.pipe.h,
            0.0,
        );
    }

    let bird = session.bird();
    out.sprite(
        Sprite::Bird { frame: bird.frame },
        bird.x - m.bird.w / 2.0,
        bird.y - m.bird.h / 2.0,
        m.bird.w,
        m.bird.h,
        bird.rotation,
    );

    out.sprite(
        Sprite::Ground,
        session.ground_x(),
        session.ground_y(),
        m.ground.w,
        m.ground.h,
        0.0,
    );

    draw_ui(session, out);
    draw_leaderboard(session, out);
}

fn draw_ui(session: &FlappySession, out: &mut dyn Renderer) {
    let m = session.metrics();
    let tap = Sprite::Tap {
        frame: session.tap_frame(),
    };
    let tap_x = (SURFACE_WIDTH - m.tap.w) / 2.0;

    match session.state() {
        FlappyState::ReadyToStart => {
            let y = (SURFACE_HEIGHT - m.get_ready.h) / 2.0;
            let x = (SURFACE_WIDTH - m.get_ready.w) / 2.0;
            out.sprite(Sprite::GetReady, x, y, m.get_ready.w, m.get_ready.h, 0.0);

            let cx = SURFACE_WIDTH / 2.0;
            let cy = y + m.get_ready.h + 10.0;
            let caret = if session.frames() % 40 < 20 { "_" } else { "" };
            out.text(cx, cy, PROMPT, TextAlign::Center, TEXT);
            out.text(
                cx,
                cy + 28.0,
                &format!("Enter Name: {}{}", session.name_entry().text, caret),
                TextAlign::Center,
                TEXT,
            );

            let tap_y = y + m.get_ready.h - m.tap.h;
            out.sprite(tap, tap_x, tap_y, m.tap.w, m.tap.h, 0.0);
        }
        FlappyState::Playing => {
            out.text(
                SURFACE_WIDTH / 2.0,
                50.0,
                &session.score().to_string(),
                TextAlign::Center,
                TEXT,
            );
        }
        FlappyState::GameOver { .. } => {
            let y = (SURFACE_HEIGHT - m.game_over.h) / 2.0;
            let x = (SURFACE_WIDTH - m.game_over.w) / 2.0;
            out.sprite(Sprite::GameOver, x, y, m.game_over.w, m.game_over.h, 0.0);

            let tap_y = y + m.game_over.h - m.tap.h;
            out.sprite(tap, tap_x, tap_y, m.tap.w, m.tap.h, 0.0);

            let cx = SURFACE_WIDTH / 2.0;
            let cy = SURFACE_HEIGHT / 2.0;
            out.text(
                cx,
                cy,
                &format!("SCORE : {}", session.score()),
                TextAlign::Center,
                TEXT,
            );
            out.text(
                cx,
                cy + 24.0,
                &format!("BEST : {}", session.best_score()),
                TextAlign::Center,
                TEXT,
            );
        }
    }
}

fn draw_leaderboard(session: &FlappySession, out: &mut dyn Renderer) {
    let x = SURFACE_WIDTH - 8.0;
    let mut y = 8.0;
    out.text(x, y, "TOP 5", TextAlign::Right, TEXT);
    y += LINE_HEIGHT;

    let entries = session.leaderboard().entries();
    if entries.is_empty() {
        out.text(x, y, "\u{2014}", TextAlign::Right, TEXT);
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let line = format!("{}. {} \u{2014} {}", i + 1, entry.name, entry.score);
        out.text(x, y, &line, TextAlign::Right, TEXT);
        y += LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};
    use crate::store::{MemoryStore, ScoreRecord};
    use crate::types::{InputEvent, Key};

    fn draw_list(session: &FlappySession) -> DrawList {
        let mut list = DrawList::new();
        draw(session, &mut list);
        list
    }

    #[test]
    fn ready_screen_shows_prompt_and_name() {
        let mut s = FlappySession::new(1, Box::new(MemoryStore::new()));
        s.handle_input(InputEvent::key(Key::Char('b')));
        s.handle_input(InputEvent::key(Key::Char('o')));
        let list = draw_list(&s);

        assert_eq!(
            list.commands().first(),
            Some(&DrawCommand::Fill {
                x: 0.0,
                y: 0.0,
                w: SURFACE_WIDTH,
                h: SURFACE_HEIGHT,
                color: SKY,
            })
        );
        assert!(list.has_text(PROMPT));
        assert!(list.has_text("Enter Name: bo_"));
        assert!(list.sprites().contains(&Sprite::GetReady));
        assert!(list.has_text("TOP 5"));
        assert!(list.has_text("\u{2014}"));
    }

    #[test]
    fn caret_blinks() {
        let mut s = FlappySession::new(1, Box::new(MemoryStore::new()));
        for _ in 0..20 {
            s.step();
        }
        assert!(draw_list(&s).has_text("Enter Name: "));
        assert!(!draw_list(&s).has_text("Enter Name: _"));
    }

    #[test]
    fn layer_order() {
        let mut s = FlappySession::new(1, Box::new(MemoryStore::new()));
        s.begin("ada");
        s.step();
        let sprites = draw_list(&s).sprites();
        let pos = |want: Sprite| sprites.iter().position(|s| *s == want);
        assert_eq!(pos(Sprite::Background), Some(0));
        assert!(pos(Sprite::PipeTop) < pos(Sprite::Ground));
        assert!(sprites.iter().position(|s| matches!(s, Sprite::Bird { .. })) < pos(Sprite::Ground));
    }

    #[test]
    fn game_over_shows_score_and_best() {
        let store = MemoryStore::with_records(vec![ScoreRecord::new("zed", 40, 0)]);
        let mut s = FlappySession::new(1, Box::new(store));
        s.begin("ada");
        s.bird_mut().y = 290.0;
        s.step();
        let list = draw_list(&s);
        assert!(list.sprites().contains(&Sprite::GameOver));
        assert!(list.has_text("SCORE : 0"));
        assert!(list.has_text("BEST : 40"));
        assert!(list.has_text("1. zed \u{2014} 40"));
    }

    #[test]
    fn live_score_while_playing() {
        let mut s = FlappySession::new(1, Box::new(MemoryStore::new()));
        s.begin("ada");
        let list = draw_list(&s);
        assert!(list.texts().contains(&"0"));
        assert!(!list.has_text("Enter Name"));
    }
}
