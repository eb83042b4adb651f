use std::collections::HashMap;
use std::{fmt, ops};

use log::warn;
use ndarray::{Array, Array2};
use serde_json::{Map, Value};

use crate::cell::CellLabel;
use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::error::PayloadError;


const ROTATE_FIELD: &str = "rotate";
const VALID_MOVES_FIELD: &str = "valid_moves";
const USER_ID_FIELD: &str = "user_id";


#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum BoardOrientation {
    #[default]
    Normal,
    Rotated,
}

impl BoardOrientation {
    // Server sends the side to move here: 1 means the board is shown upside down.
    fn from_json(value: Option<&Value>) -> Self {
        let rotated = match value {
            Some(Value::Number(n)) => n.as_f64() == Some(1.0),
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim() == "1",
            _ => false,
        };
        if rotated { BoardOrientation::Rotated } else { BoardOrientation::Normal }
    }

    pub fn css_transform(self) -> &'static str {
        match self {
            BoardOrientation::Normal => "rotate(0deg)",
            BoardOrientation::Rotated => "rotate(180deg)",
        }
    }
}


#[derive(Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: Array2<CellLabel>,
    orientation: BoardOrientation,
}

impl BoardState {
    pub fn new() -> Self {
        BoardState {
            cells: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), CellLabel::empty()),
            orientation: BoardOrientation::Normal,
        }
    }

    pub fn orientation(&self) -> BoardOrientation { self.orientation }
    pub fn set_orientation(&mut self, orientation: BoardOrientation) {
        self.orientation = orientation;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &CellLabel)> {
        Coord::all().map(|coord| (coord, &self[coord]))
    }

    // Sparse row -> column -> label mapping. Anything that does not fit the shape is an empty cell.
    fn from_json(document: &Map<String, Value>) -> Self {
        let mut board = BoardState::new();
        board.orientation = BoardOrientation::from_json(document.get(ROTATE_FIELD));
        for row in Row::all() {
            let Some(Value::Object(row_data)) = document.get(&row.to_zero_based().to_string())
            else {
                continue;
            };
            for col in Col::all() {
                if let Some(Value::String(label)) = row_data.get(&col.to_zero_based().to_string()) {
                    board[Coord::new(row, col)] = CellLabel::new(label.as_str());
                }
            }
        }
        board
    }
}

impl ops::Index<Coord> for BoardState {
    type Output = CellLabel;
    fn index(&self, pos: Coord) -> &Self::Output { &self.cells[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for BoardState {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.cells[coord_to_index(pos)]
    }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in Row::all() {
            for col in Col::all() {
                let label = &self[Coord::new(row, col)];
                let ch = match label.piece() {
                    Some(piece) => piece.to_char(),
                    None if label.is_playable() => '.',
                    None => ' ',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoardState({:?})\n{}", self.orientation, self)
    }
}


#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ValidMoves {
    moves: HashMap<Coord, Vec<Coord>>,
}

impl ValidMoves {
    pub fn new() -> Self { ValidMoves::default() }

    pub fn insert(&mut self, from: Coord, destinations: Vec<Coord>) {
        self.moves.insert(from, destinations);
    }

    pub fn is_empty(&self) -> bool { self.moves.is_empty() }
    pub fn len(&self) -> usize { self.moves.len() }
    pub fn contains_origin(&self, from: Coord) -> bool { self.moves.contains_key(&from) }

    // Empty for coordinates that have no legal moves.
    pub fn destinations(&self, from: Coord) -> &[Coord] {
        self.moves.get(&from).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn origins(&self) -> impl Iterator<Item = Coord> + '_ { self.moves.keys().copied() }

    fn from_json(value: Option<&Value>) -> Self {
        let mut valid_moves = ValidMoves::new();
        let Some(Value::Object(moves)) = value else {
            return valid_moves;
        };
        for (key, destinations) in moves {
            let Some(from) = Coord::from_cell_key(key) else {
                warn!("Ignoring valid moves for unrecognized cell {key:?}");
                continue;
            };
            let Value::Array(destinations) = destinations else {
                warn!("Ignoring valid moves for {from:?}: expected a list, got {destinations}");
                continue;
            };
            let destinations = destinations
                .iter()
                .filter_map(|to| {
                    let to_coord = to.as_str().and_then(Coord::from_cell_key);
                    if to_coord.is_none() {
                        warn!("Ignoring unrecognized destination {to} for {from:?}");
                    }
                    to_coord
                })
                .collect();
            valid_moves.insert(from, destinations);
        }
        valid_moves
    }
}


// Everything the server tells about the game in one response.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardSnapshot {
    pub board: BoardState,
    pub valid_moves: ValidMoves,
    pub user_id: Option<String>,
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        BoardSnapshot {
            board: BoardState::new(),
            valid_moves: ValidMoves::new(),
            user_id: None,
        }
    }

    pub fn from_json_str(body: &str) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(body).map_err(|err| PayloadError::InvalidJson(err.to_string()))?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> Result<Self, PayloadError> {
        let Value::Object(document) = value else {
            return Err(PayloadError::NotAnObject);
        };
        let user_id = match document.get(USER_ID_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Ok(BoardSnapshot {
            board: BoardState::from_json(document),
            valid_moves: ValidMoves::from_json(document.get(VALID_MOVES_FIELD)),
            user_id,
        })
    }
}
