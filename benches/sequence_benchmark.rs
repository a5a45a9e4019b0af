use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recursive_sequence_analyzer::hanoi;
use recursive_sequence_analyzer::sequence::{Family, Strategy};

fn strategy_benchmark(c: &mut Criterion) {
    let n = black_box(25);

    for family in Family::ALL {
        for strategy in Strategy::ALL {
            c.bench_function(format!("{family}_{strategy} {n}").as_str(), |b| {
                b.iter(|| family.compute(strategy, n))
            });
        }

        c.bench_function(format!("{family}_sequence {n}").as_str(), |b| {
            b.iter(|| family.sequence(n))
        });
    }

    // Past the recursion gate only the linear strategies are worth timing
    let large = black_box(90);
    c.bench_function(format!("Fibonacci_Iterative {large}").as_str(), |b| {
        b.iter(|| Family::Fibonacci.iterative(large))
    });
    c.bench_function(format!("Fibonacci_Memoized {large}").as_str(), |b| {
        b.iter(|| Family::Fibonacci.compute(Strategy::Memoized, large))
    });
}

fn hanoi_benchmark(c: &mut Criterion) {
    let disks = black_box(16);

    c.bench_function(format!("hanoi_recursive {disks}").as_str(), |b| {
        b.iter(|| hanoi::solve_recursive(disks))
    });
    c.bench_function(format!("hanoi_iterative {disks}").as_str(), |b| {
        b.iter(|| hanoi::iterative_moves(disks))
    });
}

criterion_group!(benches, strategy_benchmark, hanoi_benchmark);
criterion_main!(benches);
