use vanishing_tictactoe::alpha_beta_searcher::AlphaBetaSearcher;
use vanishing_tictactoe::board::Board;
use vanishing_tictactoe::bot::{Bot, Difficulty};
use vanishing_tictactoe::tictactoe_position;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta depth 4 from empty board", |b| {
        b.iter(search_empty_board)
    });
    c.bench_function("hard bot blocks open row", |b| b.iter(hard_bot_blocks));
    c.bench_function("full depth search midgame", |b| b.iter(full_depth_midgame));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_empty_board() {
    let mut board = Board::new();
    let mut searcher = AlphaBetaSearcher::new();
    black_box(searcher.search(&mut board, 4, true, i16::MIN, i16::MAX));
}

fn hard_bot_blocks() {
    let board = tictactoe_position! {
        . . .
        . O .
        X X .
    };
    let mut bot = Bot::with_seed(0);
    black_box(bot.choose_move(&board, Difficulty::Hard).ok());
}

fn full_depth_midgame() {
    let mut board = tictactoe_position! {
        X . .
        . O .
        . . X
    };
    let mut searcher = AlphaBetaSearcher::new();
    black_box(searcher.search(&mut board, 9, true, i16::MIN, i16::MAX));
}
