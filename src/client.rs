use std::sync::mpsc;

use log::{debug, error, info};

use crate::board_state::{BoardSnapshot, BoardState, ValidMoves};
use crate::cell::CellLabel;
use crate::coord::Coord;
use crate::error::ClientError;
use crate::request::ControlRequest;
use crate::selection::{BoardUi, CellMarkers};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CellView<'a> {
    pub coord: Coord,
    pub label: &'a CellLabel,
    // Coordinate classes followed by active marker classes.
    pub classes: Vec<String>,
}

// Owns everything the page displays. The board and valid moves are always exactly the last payload
// the server sent; the only local state is the in-progress selection gesture.
pub struct ClientState {
    snapshot: BoardSnapshot,
    ui: BoardUi,
    busy: bool,
    requests_tx: mpsc::Sender<ControlRequest>,
}

impl ClientState {
    pub fn new(requests_tx: mpsc::Sender<ControlRequest>) -> Self {
        ClientState {
            snapshot: BoardSnapshot::empty(),
            ui: BoardUi::new(),
            busy: false,
            requests_tx,
        }
    }

    pub fn snapshot(&self) -> &BoardSnapshot { &self.snapshot }
    pub fn board(&self) -> &BoardState { &self.snapshot.board }
    pub fn valid_moves(&self) -> &ValidMoves { &self.snapshot.valid_moves }
    pub fn ui(&self) -> &BoardUi { &self.ui }
    pub fn markers(&self, coord: Coord) -> CellMarkers { self.ui.markers(coord) }

    // True while waiting for the server. Input is still accepted in this state.
    pub fn is_busy(&self) -> bool { self.busy }

    pub fn begin_initial_load(&mut self) { self.busy = true; }

    pub fn reset_game(&mut self) { self.send_request(ControlRequest::Reset); }
    pub fn change_side(&mut self) { self.send_request(ControlRequest::ChangeSide); }

    pub fn click_cell(&mut self, coord: Coord) {
        if let Some((from, to)) = self.ui.click_cell(coord, &self.snapshot.valid_moves) {
            self.send_request(ControlRequest::Move { from, to });
        }
    }
    pub fn click_outside(&mut self) { self.ui.click_outside(); }
    pub fn hover_enter(&mut self, coord: Coord) {
        self.ui.hover_enter(coord, &self.snapshot.valid_moves);
    }
    pub fn hover_leave(&mut self) { self.ui.hover_leave(); }

    // Replaces the displayed state wholesale. Responses are applied in the order they arrive, so
    // with several requests in flight the last one to resolve wins.
    pub fn process_server_response(&mut self, body: &str) -> Result<(), ClientError> {
        match BoardSnapshot::from_json_str(body) {
            Ok(snapshot) => {
                debug!(
                    "Board received ({} movable pieces, {:?}):\n{}",
                    snapshot.valid_moves.len(),
                    snapshot.board.orientation(),
                    snapshot.board
                );
                self.snapshot = snapshot;
                self.ui.reset();
                self.busy = false;
                Ok(())
            }
            Err(err) => Err(self.process_transport_failure(err.into())),
        }
    }

    // The board stays as it was and the busy state is not lifted: there is no recovery from here.
    pub fn process_transport_failure(&mut self, err: ClientError) -> ClientError {
        error!("{err}");
        err
    }

    pub fn render_cells(&self) -> Vec<CellView<'_>> {
        self.snapshot
            .board
            .iter()
            .map(|(coord, label)| {
                let mut classes = vec![coord.row_class(), coord.col_class()];
                classes.extend(self.markers(coord).classes().map(str::to_owned));
                CellView { coord, label, classes }
            })
            .collect()
    }

    fn send_request(&mut self, request: ControlRequest) {
        info!("Sending {request:?}");
        self.busy = true;
        if self.requests_tx.send(request).is_err() {
            error!("Request channel closed, dropping {request:?}");
        }
    }
}
