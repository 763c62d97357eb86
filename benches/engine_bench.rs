use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use yambot::board::{
    score_at, scores_for, summarize, AnnouncementState, Category, Column, FaceCounts, Scorecard, ALL_CATEGORIES,
};
use yambot::config::Rules;
use yambot::turn::{validate, Action, RollNumber};

/// Every distinct roll of five dice as face counts (252 of them).
fn all_rolls() -> Vec<FaceCounts> {
    let mut rolls = Vec::new();
    for a in 1..=6u8 {
        for b in a..=6 {
            for c in b..=6 {
                for d in c..=6 {
                    for e in d..=6 {
                        if let Some(counts) = FaceCounts::from_faces(&[a, b, c, d, e]) {
                            rolls.push(counts);
                        }
                    }
                }
            }
        }
    }
    rolls
}

/// A card halfway through a game: Down and Free filled through Max.
fn midgame_card() -> Scorecard {
    let mut card = Scorecard::new();
    let dice = FaceCounts::from_faces(&[3, 3, 4, 4, 6]).unwrap_or_else(FaceCounts::empty);
    let none = AnnouncementState::none();
    for category in ALL_CATEGORIES.iter().take_while(|c| **c <= Category::Max) {
        card.commit_fill(*category, Column::Down, &dice, &none).ok();
        card.commit_fill(*category, Column::Free, &dice, &none).ok();
    }
    card
}

fn bench_score_all_rolls(c: &mut Criterion) {
    let rolls = all_rolls();
    c.bench_function("score_at_252_rolls_x_14", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for roll in &rolls {
                for category in ALL_CATEGORIES {
                    sum += score_at(black_box(category), black_box(roll)) as u32;
                }
            }
            sum
        })
    });
}

fn bench_scores_for(c: &mut Criterion) {
    let dice = FaceCounts::from_faces(&[2, 2, 5, 5, 5]).unwrap_or_else(FaceCounts::empty);
    c.bench_function("scores_for_full_house", |b| b.iter(|| scores_for(black_box(&dice))));
}

fn bench_feasible_cells(c: &mut Criterion) {
    let card = midgame_card();
    let ann = AnnouncementState::declared(Category::Yamb);
    c.bench_function("feasible_cells_midgame", |b| {
        b.iter(|| black_box(&card).feasible_cells(black_box(&ann)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let card = midgame_card();
    let rules = Rules::default();
    let none = AnnouncementState::none();
    let dice = FaceCounts::from_faces(&[1, 1, 2, 2, 2]).unwrap_or_else(FaceCounts::empty);
    let actions = [
        Action::keep([2, 3, 0, 0, 0, 0]),
        Action::Reroll {
            keep: [0, 3, 0, 0, 0, 0],
            announce: Some(Category::ThreeOfAKind),
        },
        Action::fill(Category::FullHouse, Column::Up),
        Action::fill(Category::Min, Column::Down),
    ];
    c.bench_function("validate_4_actions", |b| {
        b.iter(|| {
            actions
                .iter()
                .zip([RollNumber::First, RollNumber::First, RollNumber::Third, RollNumber::Third])
                .filter(|(a, roll)| validate(a, black_box(&dice), *roll, &card, &none, &rules).is_ok())
                .count()
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let card = midgame_card();
    let rules = Rules::default();
    c.bench_function("summarize_midgame", |b| {
        b.iter(|| summarize(black_box(&card), rules.upper_bonus()).total())
    });
}

fn bench_reroll(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let dice = FaceCounts::from_faces(&[6, 6, 6, 1, 2]).unwrap_or_else(FaceCounts::empty);
    let keep = [0, 0, 0, 0, 0, 3];
    c.bench_function("reroll_two_dice", |b| b.iter(|| dice.reroll(black_box(&keep), &mut rng)));
}

criterion_group!(
    benches,
    bench_score_all_rolls,
    bench_scores_for,
    bench_feasible_cells,
    bench_validate,
    bench_summarize,
    bench_reroll
);
criterion_main!(benches);
