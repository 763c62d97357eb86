//! Dice results collapsed to per-face counts.
//!
//! A roll of five dice is stored as how many dice show each face 1..=6.
//! Order of the dice never matters for scoring, so this is the only form
//! the scorecard and validator see.

use rand::Rng;

/// Number of dice in a roll.
pub const DICE_COUNT: u8 = 5;

/// Number of faces on a die.
pub const FACE_COUNT: usize = 6;

/// All die faces in ascending order.
pub const ALL_FACES: [u8; FACE_COUNT] = [1, 2, 3, 4, 5, 6];

/// How many of each face to keep when re-rolling, indexed by `face - 1`.
pub type KeepCounts = [u8; FACE_COUNT];

/// Occurrence count of each die face among the held dice.
///
/// A complete roll has counts summing to [`DICE_COUNT`]. The scorer takes
/// completeness as a precondition; [`FaceCounts::is_complete`] lets the dice
/// source check it before handing counts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceCounts {
    counts: [u8; FACE_COUNT],
}

impl FaceCounts {
    /// Creates counts directly, indexed by `face - 1`.
    pub const fn from_counts(counts: [u8; FACE_COUNT]) -> Self {
        FaceCounts { counts }
    }

    /// Tallies individual die faces. Returns `None` if any face is outside 1..=6.
    pub fn from_faces(faces: &[u8]) -> Option<Self> {
        let mut counts = [0u8; FACE_COUNT];
        for &face in faces {
            if !(1..=6).contains(&face) {
                return None;
            }
            counts[face as usize - 1] += 1;
        }
        Some(FaceCounts { counts })
    }

    /// Rolls `DICE_COUNT` fresh dice.
    pub fn roll(rng: &mut impl Rng) -> Self {
        FaceCounts::empty().with_rolled(DICE_COUNT, rng)
    }

    /// Keeps `keep` and rolls fresh dice for the remainder.
    ///
    /// The caller is expected to have validated `keep` against these counts.
    pub fn reroll(&self, keep: &KeepCounts, rng: &mut impl Rng) -> Self {
        let mut kept = [0u8; FACE_COUNT];
        for i in 0..FACE_COUNT {
            kept[i] = keep[i].min(self.counts[i]);
        }
        let held = FaceCounts { counts: kept };
        held.with_rolled(DICE_COUNT.saturating_sub(held.total()), rng)
    }

    /// Counts with no dice at all.
    pub const fn empty() -> Self {
        FaceCounts { counts: [0; FACE_COUNT] }
    }

    fn with_rolled(mut self, n: u8, rng: &mut impl Rng) -> Self {
        for _ in 0..n {
            let face: u8 = rng.gen_range(1..=6);
            self.counts[face as usize - 1] += 1;
        }
        self
    }

    /// Number of dice showing `face`. Faces outside 1..=6 count zero.
    pub fn count(&self, face: u8) -> u8 {
        match face {
            1..=6 => self.counts[face as usize - 1],
            _ => 0,
        }
    }

    /// Counts indexed by `face - 1`.
    pub const fn as_array(&self) -> &[u8; FACE_COUNT] {
        &self.counts
    }

    /// Total number of dice recorded.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// True when exactly five dice are recorded.
    pub fn is_complete(&self) -> bool {
        self.total() == DICE_COUNT
    }

    /// Sum of all pips: face × count over every face.
    pub fn pip_sum(&self) -> u8 {
        self.iter().map(|(face, n)| face * n).sum()
    }

    /// Iterates `(face, count)` pairs in ascending face order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        ALL_FACES.iter().map(move |&f| (f, self.counts[f as usize - 1]))
    }

    /// Expands back into individual faces, ascending.
    pub fn faces(&self) -> Vec<u8> {
        self.iter()
            .flat_map(|(face, n)| std::iter::repeat(face).take(n as usize))
            .collect()
    }
}
