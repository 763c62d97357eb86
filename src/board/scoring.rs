//! Category scoring.
//!
//! `score_at` is a pure function of the category and the held dice; it never
//! looks at the scorecard. Each category is judged on its own, so one roll can
//! satisfy several patterns at once (a full house is also two pairs and three
//! of a kind). Unsatisfied patterns score zero, which is how a player crosses
//! a category out.

use super::category::Category;
use super::dice::FaceCounts;

/// Highest score any single cell can hold (Yamb of sixes: 60 + 30).
pub const MAX_CELL_SCORE: u8 = 90;

const TWO_PAIRS_BONUS: u8 = 10;
const THREE_OF_A_KIND_BONUS: u8 = 20;
const SMALL_STRAIGHT: u8 = 45;
const LARGE_STRAIGHT: u8 = 50;
const FULL_HOUSE_BONUS: u8 = 40;
const FOUR_OF_A_KIND_BONUS: u8 = 50;
const YAMB_BONUS: u8 = 60;

/// Pip sum of 1-2-3-4-5.
const SMALL_STRAIGHT_SUM: u8 = 15;

/// Score `category` would yield for `dice`.
///
/// `dice` must be a complete roll (five dice); the result is then in
/// `0..=MAX_CELL_SCORE`. Incomplete counts are a caller error and score
/// whatever the formulas yield.
pub fn score_at(category: Category, dice: &FaceCounts) -> u8 {
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => upper(category, dice),
        // Max and Min deliberately share a formula.
        Category::Max | Category::Min => dice.pip_sum(),
        Category::TwoPairs => two_pairs(dice),
        Category::ThreeOfAKind => n_of_a_kind(dice, 3, THREE_OF_A_KIND_BONUS),
        Category::Straight => straight(dice),
        Category::FullHouse => full_house(dice),
        Category::FourOfAKind => n_of_a_kind(dice, 4, FOUR_OF_A_KIND_BONUS),
        Category::Yamb => yamb(dice),
    }
}

/// Scores for every category, indexed by `Category as usize`.
pub fn scores_for(dice: &FaceCounts) -> [u8; super::category::CATEGORY_COUNT] {
    let mut out = [0u8; super::category::CATEGORY_COUNT];
    for c in super::category::ALL_CATEGORIES {
        out[c.index()] = score_at(c, dice);
    }
    out
}

fn upper(category: Category, dice: &FaceCounts) -> u8 {
    match category.face() {
        Some(face) => face * dice.count(face),
        None => 0,
    }
}

/// Faces whose count satisfies `pred`.
fn faces_where<'a>(dice: &'a FaceCounts, pred: impl Fn(u8) -> bool + 'a) -> impl Iterator<Item = u8> + 'a {
    dice.iter().filter(move |&(_, n)| pred(n)).map(|(f, _)| f)
}

fn two_pairs(dice: &FaceCounts) -> u8 {
    let pairs: Vec<u8> = faces_where(dice, |n| n >= 2).collect();
    if pairs.len() != 2 {
        return 0;
    }
    TWO_PAIRS_BONUS + pairs.iter().map(|f| f * 2).sum::<u8>()
}

/// Exactly one face with at least `n` dice scores `bonus + face * n`.
fn n_of_a_kind(dice: &FaceCounts, n: u8, bonus: u8) -> u8 {
    let mut hits = faces_where(dice, |c| c >= n);
    match (hits.next(), hits.next()) {
        (Some(face), None) => bonus + face * n,
        _ => 0,
    }
}

fn straight(dice: &FaceCounts) -> u8 {
    if faces_where(dice, |n| n == 1).count() != 5 {
        return 0;
    }
    if dice.pip_sum() == SMALL_STRAIGHT_SUM {
        SMALL_STRAIGHT
    } else {
        LARGE_STRAIGHT
    }
}

fn full_house(dice: &FaceCounts) -> u8 {
    let pairs = faces_where(dice, |n| n == 2).count();
    let triples = faces_where(dice, |n| n == 3).count();
    if pairs == 1 && triples == 1 {
        FULL_HOUSE_BONUS + dice.pip_sum()
    } else {
        0
    }
}

fn yamb(dice: &FaceCounts) -> u8 {
    if faces_where(dice, |n| n >= 5).count() == 1 {
        YAMB_BONUS + dice.pip_sum()
    } else {
        0
    }
}
