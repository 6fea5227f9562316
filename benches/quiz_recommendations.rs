//! Quiz and Routine Benchmarks
//!
//! **Purpose:** Confirm that recommendations are available immediately
//! after the last answer and that routine views stay cheap to recompute.
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench quiz_recommendations
//! ```
//!
//! **What's Being Measured:**
//! 1. `complete quiz` - Four answers from a fresh quiz
//! 2. `recommendations` - Rule table evaluation on a completed quiz
//! 3. `routine views` - visible steps, my routine and the estimate for both tabs

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use velura::catalog::{Catalog, TimeOfDay};
use velura::quiz::QuizEngine;
use velura::routine::RoutineModel;

const ANSWERS: [(&str, &str); 4] = [
    ("skinType", "combination"),
    ("concerns", "aging"),
    ("routine", "extensive"),
    ("texture", "rich"),
];

fn bench_complete_quiz(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    c.bench_function("complete quiz", |b| {
        b.iter(|| {
            let mut quiz = QuizEngine::new(catalog.clone());
            for (question, value) in ANSWERS {
                quiz.answer(question, value).unwrap();
            }
            black_box(quiz)
        });
    });
}

fn bench_recommendations(c: &mut Criterion) {
    let mut quiz = QuizEngine::new(Arc::new(Catalog::builtin().unwrap()));
    for (question, value) in ANSWERS {
        quiz.answer(question, value).unwrap();
    }
    c.bench_function("recommendations", |b| {
        b.iter(|| black_box(quiz.recommendations()));
    });
}

fn bench_routine_views(c: &mut Criterion) {
    let routine = RoutineModel::with_defaults(Arc::new(Catalog::builtin().unwrap())).unwrap();
    c.bench_function("routine views", |b| {
        b.iter(|| {
            for time in [TimeOfDay::Morning, TimeOfDay::Evening] {
                black_box(routine.visible_steps(time));
                black_box(routine.my_routine(time));
                black_box(routine.estimated_minutes(time));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_complete_quiz,
    bench_recommendations,
    bench_routine_views
);
criterion_main!(benches);
