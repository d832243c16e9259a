use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilt_2048::core::{at_least_one_move_exists, Board, Game, Tile};
use tilt_2048::types::Direction;

/// Board with every cell filled in a checkerboard of 2s and 4s
fn full_board(size: u8) -> Board {
    let mut board = Board::new(size);
    for row in 0..size {
        for col in 0..size {
            let value = if (col + row) % 2 == 0 { 2 } else { 4 };
            board.add_tile(Tile::new(value, col, row));
        }
    }
    board
}

fn bench_tilt_full_board(c: &mut Criterion) {
    c.bench_function("tilt_full_4x4", |b| {
        b.iter(|| {
            let mut game = Game::new(4);
            for row in 0..4 {
                for col in 0..2 {
                    game.add_tile(Tile::new(2, col * 2, row));
                    game.add_tile(Tile::new(2, col * 2 + 1, row));
                }
            }
            game.tilt(black_box(Direction::Left))
        })
    });
}

fn bench_tilt_sparse(c: &mut Criterion) {
    c.bench_function("tilt_sparse_4x4", |b| {
        b.iter(|| {
            let mut game = Game::new(4);
            game.add_tile(Tile::new(2, 0, 0));
            game.add_tile(Tile::new(2, 3, 3));
            game.tilt(black_box(Direction::Up))
        })
    });
}

fn bench_move_scan(c: &mut Criterion) {
    let board = full_board(16);
    c.bench_function("move_exists_16x16", |b| {
        b.iter(|| at_least_one_move_exists(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_tilt_full_board,
    bench_tilt_sparse,
    bench_move_scan
);
criterion_main!(benches);
