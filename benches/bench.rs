use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eight_puzzle::{
    is_solvable, parse_board, random_board, shortest_solution_len, Strategy, GOAL,
};
use rand::{rngs::StdRng, SeedableRng};

const SIMPLE_INPUT: &str = "1 2 5 / 3 4 0 / 6 7 8";

const MEDIUM_INPUT: &str = "7 2 4 / 5 0 6 / 8 3 1";

const HARDER_INPUT: &str = "8 6 7 / 2 5 4 / 3 0 1";

fn criterion_bench(c: &mut Criterion) {
    for (name, input) in [
        ("simple", SIMPLE_INPUT),
        ("medium", MEDIUM_INPUT),
        ("harder", HARDER_INPUT),
    ] {
        let board = parse_board(input).unwrap();

        c.bench_function(&format!("astar {}", name), |b| {
            b.iter(|| Strategy::AStar.search(black_box(&board), black_box(&GOAL)))
        });

        c.bench_function(&format!("ldfs {}", name), |b| {
            let strategy = Strategy::limited_dfs(30);
            b.iter(|| strategy.search(black_box(&board), black_box(&GOAL)))
        });

        c.bench_function(&format!("bfs {}", name), |b| {
            b.iter(|| shortest_solution_len(black_box(&board), black_box(&GOAL)))
        });
    }

    c.bench_function("random board", |b| {
        let mut rng = StdRng::seed_from_u64(8);
        b.iter(|| is_solvable(&random_board(&mut rng)))
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
