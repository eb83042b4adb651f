use std::str::FromStr;

use strum::EnumString;


const PIECE_CLASS: &str = "piece";
const CAN_MOVE_CLASS: &str = "can_move";


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Force {
    White,
    Black,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub force: Force,
    pub kind: PieceKind,
}

impl Piece {
    pub fn to_char(self) -> char {
        match (self.force, self.kind) {
            (Force::White, PieceKind::Man) => 'w',
            (Force::White, PieceKind::King) => 'W',
            (Force::Black, PieceKind::Man) => 'b',
            (Force::Black, PieceKind::King) => 'B',
        }
    }
}


// Class string the server assigns to a cell, e.g. "piece white king" or "not_game". The client
// puts it on the rendered piece element verbatim. Interpretation is only needed for logging.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct CellLabel(String);

impl CellLabel {
    pub fn new(label: impl Into<String>) -> Self { CellLabel(label.into()) }
    pub fn empty() -> Self { CellLabel(String::new()) }

    pub fn as_str(&self) -> &str { &self.0 }
    pub fn is_empty(&self) -> bool { self.0.trim().is_empty() }
    pub fn classes(&self) -> impl Iterator<Item = &str> { self.0.split_whitespace() }
    pub fn has_class(&self, class: &str) -> bool { self.classes().any(|c| c == class) }

    pub fn can_move(&self) -> bool { self.has_class(CAN_MOVE_CLASS) }

    // A playable square without a piece ("piece empty") is `None`, same as unknown labels.
    pub fn piece(&self) -> Option<Piece> {
        if !self.has_class(PIECE_CLASS) {
            return None;
        }
        let force = self.classes().find_map(|c| Force::from_str(c).ok())?;
        let kind = if self.has_class("king") { PieceKind::King } else { PieceKind::Man };
        Some(Piece { force, kind })
    }

    pub fn is_playable(&self) -> bool { self.has_class(PIECE_CLASS) }
}

impl From<&str> for CellLabel {
    fn from(label: &str) -> Self { CellLabel::new(label) }
}
