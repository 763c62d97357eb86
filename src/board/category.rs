//! Scorecard rows and columns.
//!
//! The 14 scoring categories are enumerated top to bottom in scorecard
//! order. The `#[repr(u8)]` discriminants double as grid indices, and the
//! Down/Up cursors walk this order.

use std::fmt;

/// The number of scoring categories (rows) on a scorecard.
pub const CATEGORY_COUNT: usize = 14;

/// The number of fill columns on a scorecard.
pub const COLUMN_COUNT: usize = 4;

/// A scoring category (scorecard row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    Ones = 0,
    Twos = 1,
    Threes = 2,
    Fours = 3,
    Fives = 4,
    Sixes = 5,
    Max = 6,
    Min = 7,
    TwoPairs = 8,
    ThreeOfAKind = 9,
    Straight = 10,
    FullHouse = 11,
    FourOfAKind = 12,
    Yamb = 13,
}

/// All categories in scorecard order.
pub const ALL_CATEGORIES: [Category; CATEGORY_COUNT] = [
    Category::Ones, Category::Twos, Category::Threes, Category::Fours,
    Category::Fives, Category::Sixes, Category::Max, Category::Min,
    Category::TwoPairs, Category::ThreeOfAKind, Category::Straight,
    Category::FullHouse, Category::FourOfAKind, Category::Yamb,
];

impl Category {
    /// The first category, where the Down cursor starts.
    pub const FIRST: Category = Category::Ones;

    /// The last category, where the Up cursor starts.
    pub const LAST: Category = Category::Yamb;

    /// Returns the category at a grid row index, if in range.
    pub fn from_index(idx: usize) -> Option<Category> {
        ALL_CATEGORIES.get(idx).copied()
    }

    /// Returns the grid row index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the category below this one, or `None` after Yamb.
    pub fn next(self) -> Option<Category> {
        Category::from_index(self.index() + 1)
    }

    /// Returns the category above this one, or `None` before Ones.
    pub fn prev(self) -> Option<Category> {
        self.index().checked_sub(1).and_then(Category::from_index)
    }

    /// For Ones..Sixes, the die face the category counts.
    pub const fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// True for the six face-count categories.
    pub const fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// Short lowercase name used by the text protocol.
    pub const fn abbr(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Max => "max",
            Category::Min => "min",
            Category::TwoPairs => "twopairs",
            Category::ThreeOfAKind => "three",
            Category::Straight => "straight",
            Category::FullHouse => "full",
            Category::FourOfAKind => "poker",
            Category::Yamb => "yamb",
        }
    }

    /// Display name used when rendering the grid.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::Max => "Max",
            Category::Min => "Min",
            Category::TwoPairs => "Two pairs",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::Yamb => "Yamb",
        }
    }

    /// Parses a category from its abbreviation or a long alias.
    ///
    /// Matching is case-insensitive and ignores `_` and `-`.
    pub fn from_abbr(s: &str) -> Option<Category> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "ones" | "1" => Some(Category::Ones),
            "twos" | "2" => Some(Category::Twos),
            "threes" | "3" => Some(Category::Threes),
            "fours" | "4" => Some(Category::Fours),
            "fives" | "5" => Some(Category::Fives),
            "sixes" | "6" => Some(Category::Sixes),
            "max" => Some(Category::Max),
            "min" => Some(Category::Min),
            "twopairs" | "pairs" => Some(Category::TwoPairs),
            "three" | "threeofakind" | "trips" => Some(Category::ThreeOfAKind),
            "straight" => Some(Category::Straight),
            "full" | "fullhouse" => Some(Category::FullHouse),
            "poker" | "fourofakind" | "four" => Some(Category::FourOfAKind),
            "yamb" => Some(Category::Yamb),
            _ => None,
        }
    }
}

/// A fill column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Column {
    /// Filled top to bottom.
    Down = 0,
    /// Filled bottom to top.
    Up = 1,
    /// Filled in any order.
    Free = 2,
    /// Only the cell announced this turn.
    Announced = 3,
}

/// All columns in scorecard order.
pub const ALL_COLUMNS: [Column; COLUMN_COUNT] =
    [Column::Down, Column::Up, Column::Free, Column::Announced];

impl Column {
    /// Returns the column at a grid column index, if in range.
    pub fn from_index(idx: usize) -> Option<Column> {
        ALL_COLUMNS.get(idx).copied()
    }

    /// Returns the grid column index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used by the text protocol.
    pub const fn abbr(self) -> &'static str {
        match self {
            Column::Down => "down",
            Column::Up => "up",
            Column::Free => "free",
            Column::Announced => "announced",
        }
    }

    /// Parses a column from its name or single-letter abbreviation.
    pub fn from_abbr(s: &str) -> Option<Column> {
        match s.to_ascii_lowercase().as_str() {
            "down" | "d" => Some(Column::Down),
            "up" | "u" => Some(Column::Up),
            "free" | "f" => Some(Column::Free),
            "announced" | "announce" | "a" => Some(Column::Announced),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}
