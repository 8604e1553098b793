//! Checkers Engine Benchmarks
//!
//! Performance benchmarks for the hot engine paths using Criterion.

use checkers_engine::{Checkers, Coordinate, Player};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn new_game() -> Checkers {
    let one = Player::new("first");
    let first = one.id();
    let mut game = Checkers::new(one, Player::new("second")).expect("distinct players");
    game.init(Some(first)).expect("registered player");
    game
}

fn bench_init(c: &mut Criterion) {
    let mut game = new_game();
    let first = game.player_one().id();

    c.bench_function("init", |b| b.iter(|| black_box(game.init(Some(first)))));
}

fn bench_validate_move(c: &mut Criterion) {
    let game = new_game();

    c.bench_function("validate_move_opening", |b| {
        b.iter(|| black_box(game.validate_move(Coordinate::new(2, 2), Coordinate::new(3, 3))))
    });
}

fn bench_possible_moves(c: &mut Criterion) {
    let game = new_game();

    c.bench_function("possible_moves_all_pieces", |b| {
        b.iter(|| {
            let total: usize = game
                .board()
                .iter()
                .map(|(coord, _)| game.possible_moves(*coord).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_capture_sequence(c: &mut Criterion) {
    c.bench_function("opening_with_capture", |b| {
        b.iter(|| {
            let mut game = new_game();
            game.move_piece(Coordinate::new(2, 2), Coordinate::new(3, 3));
            game.move_piece(Coordinate::new(5, 5), Coordinate::new(4, 4));
            black_box(game.move_piece(Coordinate::new(3, 3), Coordinate::new(5, 5)))
        })
    });
}

criterion_group!(
    benches,
    bench_init,
    bench_validate_move,
    bench_possible_moves,
    bench_capture_sequence
);
criterion_main!(benches);
