use std::fmt;

use itertools::Itertools;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;

const ROW_CLASS_PREFIX: &str = "y_";
const COL_CLASS_PREFIX: &str = "x_";


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: u8) -> Option<Self> {
        (idx < NUM_ROWS).then_some(Self { idx })
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: u8) -> Option<Self> {
        (idx < NUM_COLS).then_some(Self { idx })
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}


// Wire format for a cell is "y_<row> x_<col>", which doubles as the pair of CSS classes that tag
// the rendered cell. The row is always the `y_` part.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_zero_based(row: u8, col: u8) -> Option<Self> {
        Some(Self {
            row: Row::try_from_zero_based(row)?,
            col: Col::try_from_zero_based(col)?,
        })
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    pub fn row_class(self) -> String { format!("{ROW_CLASS_PREFIX}{}", self.row.to_zero_based()) }
    pub fn col_class(self) -> String { format!("{COL_CLASS_PREFIX}{}", self.col.to_zero_based()) }

    pub fn to_cell_key(self) -> String { format!("{} {}", self.row_class(), self.col_class()) }

    // Tokens other than the coordinate classes are ignored, so a class list like
    // "x_3 y_4 move-possible" parses as well. Repeated or missing components are rejected.
    pub fn from_cell_key(key: &str) -> Option<Self> {
        let mut row = None;
        let mut col = None;
        for token in key.split_whitespace() {
            if let Some(idx) = token.strip_prefix(ROW_CLASS_PREFIX) {
                if row.replace(Row::try_from_zero_based(idx.parse().ok()?)?).is_some() {
                    return None;
                }
            } else if let Some(idx) = token.strip_prefix(COL_CLASS_PREFIX) {
                if col.replace(Col::try_from_zero_based(idx.parse().ok()?)?).is_some() {
                    return None;
                }
            }
        }
        Some(Coord { row: row?, col: col? })
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row.to_zero_based(), self.col.to_zero_based())
    }
}
