use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hex_graph::{make_dataset, winner, GameRng, GraphEncoder, Player};
use hex_graph::training::play_game;
use hex_graph::Board;

/// A finished random game on an n×n board.
fn finished_board(n: usize, seed: u64) -> Board {
    let mut rng = GameRng::new(seed);
    let game = play_game(&Board::new(n), Player::X, &mut rng).expect("game failed");
    game.positions.last().expect("no positions").0.clone()
}

fn bench_winner(c: &mut Criterion) {
    let mut group = c.benchmark_group("winner");
    for n in [5, 11, 19] {
        let board = finished_board(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| winner(black_box(board)))
        });
    }
    group.finish();
}

fn bench_make_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_dataset");
    for n in [5, 7, 11] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| make_dataset(black_box(n), 20, 7).expect("self-play failed"))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let dataset = make_dataset(7, 50, 1).expect("self-play failed");
    let encoder = GraphEncoder::new(7);
    c.bench_function("encode dataset 7x7", |b| {
        b.iter(|| dataset.to_batch(black_box(&encoder)).expect("encoding failed"))
    });
}

criterion_group!(benches, bench_winner, bench_make_dataset, bench_encode);
criterion_main!(benches);
