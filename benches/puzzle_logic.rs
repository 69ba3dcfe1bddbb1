use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_wheel::core::{
    validator, LetterPool, LetterPoolManager, PuzzleController, PuzzleDefinition, WordBook,
};
use word_wheel::types::{LetterId, Point};

fn bench_submit(c: &mut Criterion) {
    let definition = PuzzleDefinition::reference().unwrap();
    let pool = definition.letter_pool().clone();
    let chain = [LetterId(0), LetterId(1), LetterId(3), LetterId(2)];

    c.bench_function("submit_gold", |b| {
        b.iter(|| {
            let mut words = WordBook::from_placements(definition.words());
            validator::submit(&mut words, &pool, black_box(&chain))
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let pool = LetterPool::new("ABCDEFGHIJKLMNOP".chars()).unwrap();
    let mut manager = LetterPoolManager::new(12345);

    c.bench_function("shuffle_16_letters", |b| {
        b.iter(|| manager.shuffle(black_box(&pool)))
    });
}

fn bench_drag(c: &mut Criterion) {
    let mut puzzle = PuzzleController::new(PuzzleDefinition::reference().unwrap(), 12345, ());
    let points: Vec<Point> = (0..64)
        .map(|i| {
            let angle = i as f32 / 64.0 * std::f32::consts::TAU;
            Point::new(70.0 * angle.cos(), 70.0 * angle.sin())
        })
        .collect();

    c.bench_function("drag_full_circle", |b| {
        b.iter(|| {
            puzzle.pointer_down(LetterId(0)).unwrap();
            for p in &points {
                puzzle.pointer_move(black_box(*p));
            }
            puzzle.pointer_up_outside();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let puzzle = PuzzleController::new(PuzzleDefinition::reference().unwrap(), 12345, ());

    c.bench_function("snapshot", |b| b.iter(|| black_box(puzzle.snapshot())));
}

criterion_group!(benches, bench_submit, bench_shuffle, bench_drag, bench_snapshot);
criterion_main!(benches);
