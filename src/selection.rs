// Two-click move gesture: pick an origin among the server-declared ones, then pick one of its
// destinations. The client never decides legality; it only looks destinations up in `ValidMoves`.

use crate::board_state::ValidMoves;
use crate::coord::Coord;


pub const MOVE_SELECTED_CLASS: &str = "move-selected";
pub const MOVE_POSSIBLE_CLASS: &str = "move-possible";
pub const HIGHLIGHT_HOVER_CLASS: &str = "highlight-hover";


#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct CellMarkers {
    pub selected: bool,
    pub move_possible: bool,
    pub hover_highlight: bool,
}

impl CellMarkers {
    pub fn classes(self) -> impl Iterator<Item = &'static str> {
        [
            (self.selected, MOVE_SELECTED_CLASS),
            (self.move_possible, MOVE_POSSIBLE_CLASS),
            (self.hover_highlight, HIGHLIGHT_HOVER_CLASS),
        ]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
    }

    // Every marker class paired with whether it should be present. Used to sync existing cells.
    pub fn class_toggles(self) -> [(&'static str, bool); 3] {
        [
            (MOVE_SELECTED_CLASS, self.selected),
            (MOVE_POSSIBLE_CLASS, self.move_possible),
            (HIGHLIGHT_HOVER_CLASS, self.hover_highlight),
        ]
    }
}


#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BoardUi {
    selected: Option<Coord>,
    move_possible: Vec<Coord>,
    hover_highlight: Vec<Coord>,
}

impl BoardUi {
    pub fn new() -> Self { BoardUi::default() }

    pub fn selected(&self) -> Option<Coord> { self.selected }
    pub fn move_possible(&self) -> &[Coord] { &self.move_possible }
    pub fn hover_highlight(&self) -> &[Coord] { &self.hover_highlight }

    pub fn markers(&self, coord: Coord) -> CellMarkers {
        CellMarkers {
            selected: self.selected == Some(coord),
            move_possible: self.move_possible.contains(&coord),
            hover_highlight: self.hover_highlight.contains(&coord),
        }
    }

    // Returns the completed move, if the click finished a gesture.
    pub fn click_cell(&mut self, coord: Coord, valid_moves: &ValidMoves) -> Option<(Coord, Coord)> {
        if self.move_possible.contains(&coord) {
            if let Some(from) = self.selected {
                self.clear_selection();
                return Some((from, coord));
            }
        }
        self.clear_selection();
        if valid_moves.contains_origin(coord) {
            self.selected = Some(coord);
            self.move_possible = valid_moves.destinations(coord).to_vec();
        }
        None
    }

    pub fn click_outside(&mut self) { self.clear_selection(); }

    pub fn hover_enter(&mut self, coord: Coord, valid_moves: &ValidMoves) {
        for &to in valid_moves.destinations(coord) {
            if !self.hover_highlight.contains(&to) {
                self.hover_highlight.push(to);
            }
        }
    }

    // Clears the whole grid, not only the destinations of the cell being left.
    pub fn hover_leave(&mut self) { self.hover_highlight.clear(); }

    pub fn reset(&mut self) { *self = BoardUi::default(); }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.move_possible.clear();
    }
}
