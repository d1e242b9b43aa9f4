use criterion::{black_box, criterion_group, criterion_main, Criterion};
use canvas_arcade::core::{
    Board, DrawList, FlappySession, MemoryStore, TetrisAction, TetrisSession,
};
use canvas_arcade::term::{FrameBuffer, RasterCanvas};
use canvas_arcade::types::PieceKind;

fn bench_tetris_advance(c: &mut Criterion) {
    let mut session = TetrisSession::new(12345);

    c.bench_function("tetris_advance_16ms", |b| {
        b.iter(|| {
            session.advance(black_box(16));
            if session.game_over() {
                session.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20i8 {
                for x in 0..10i8 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = TetrisSession::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            session.apply(TetrisAction::HardDrop);
            if session.game_over() {
                session.reset();
            }
        })
    });
}

fn bench_flappy_step(c: &mut Criterion) {
    let mut session = FlappySession::new(12345, Box::new(MemoryStore::new()));
    session.begin("bench");

    c.bench_function("flappy_step", |b| {
        b.iter(|| {
            session.bird_mut().y = 200.0;
            session.bird_mut().speed = 0.0;
            session.step();
        })
    });
}

fn bench_draw_tetris(c: &mut Criterion) {
    let session = TetrisSession::new(12345);
    let mut list = DrawList::new();

    c.bench_function("draw_tetris_list", |b| {
        b.iter(|| {
            list.clear_commands();
            canvas_arcade::core::tetris::view::draw(&session, true, &mut list);
        })
    });
}

fn bench_raster_flappy(c: &mut Criterion) {
    let session = FlappySession::new(12345, Box::new(MemoryStore::new()));
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("raster_flappy_120x40", |b| {
        b.iter(|| {
            let mut canvas = RasterCanvas::new(&mut fb);
            canvas_arcade::core::flappy::view::draw(&session, &mut canvas);
        })
    });
}

criterion_group!(
    benches,
    bench_tetris_advance,
    bench_line_clear,
    bench_hard_drop,
    bench_flappy_step,
    bench_draw_tetris,
    bench_raster_flappy
);
criterion_main!(benches);
