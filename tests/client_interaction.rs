mod common;

use std::sync::mpsc;

use checkers_client::selection::{HIGHLIGHT_HOVER_CLASS, MOVE_POSSIBLE_CLASS, MOVE_SELECTED_CLASS};
use checkers_client::{
    BoardSnapshot, ClientError, ClientState, ControlRequest, SERVER_ERROR_MESSAGE,
};
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;


#[test]
fn initial_load() {
    let (tx, rx) = mpsc::channel();
    let mut client = ClientState::new(tx);
    client.begin_initial_load();
    assert!(client.is_busy());
    client.process_server_response(&starting_position_body()).unwrap();
    assert!(!client.is_busy());
    assert_eq!(client.valid_moves().len(), 4);
    assert!(drain(&rx).is_empty());
}

#[test]
fn render_cells_carry_coordinates_and_labels() {
    let (client, _rx) = loaded_client();
    let cells = client.render_cells();
    assert_eq!(cells.len(), 64);
    for cell in &cells {
        let row = cell.coord.row.to_zero_based();
        let col = cell.coord.col.to_zero_based();
        assert_eq!(cell.classes, vec![format!("y_{row}"), format!("x_{col}")]);
        assert_eq!(cell.label, &client.board()[cell.coord]);
    }
    assert_eq!(cells[1].label.as_str(), "piece black");
    assert_eq!(cells[0].label.as_str(), "not_game");
}

#[test]
fn render_cells_include_markers() {
    let (mut client, _rx) = loaded_client();
    client.click_cell(coord!(5, 2));
    client.hover_enter(coord!(5, 0));
    let cells = client.render_cells();
    let classes_at = |row: usize, col: usize| cells[row * 8 + col].classes.clone();
    assert_eq!(classes_at(5, 2), vec!["y_5", "x_2", MOVE_SELECTED_CLASS]);
    assert_eq!(classes_at(4, 1), vec!["y_4", "x_1", MOVE_POSSIBLE_CLASS, HIGHLIGHT_HOVER_CLASS]);
    assert_eq!(classes_at(4, 3), vec!["y_4", "x_3", MOVE_POSSIBLE_CLASS]);
}

#[test]
fn select_and_move_sends_exactly_one_request() {
    let (mut client, rx) = loaded_client();
    client.click_cell(coord!(5, 2));
    assert!(drain(&rx).is_empty());
    assert!(!client.is_busy());
    client.click_cell(coord!(4, 3));
    assert_eq!(
        drain(&rx),
        vec![ControlRequest::Move { from: coord!(5, 2), to: coord!(4, 3) }]
    );
    assert_eq!(
        serde_json::to_value(ControlRequest::Move { from: coord!(5, 2), to: coord!(4, 3) })
            .unwrap(),
        json!({ "move_from": "y_5 x_2", "move_to": "y_4 x_3" })
    );
    assert!(client.is_busy());
    assert!(marked_cells(&client).is_empty());
}

#[test]
fn click_without_moves_clears_selection() {
    let (mut client, rx) = loaded_client();
    client.click_cell(coord!(5, 2));
    assert_eq!(marked_cells(&client), vec![coord!(4, 1), coord!(4, 3), coord!(5, 2)]);
    // A white man that cannot move.
    client.click_cell(coord!(6, 1));
    assert!(marked_cells(&client).is_empty());
    client.click_cell(coord!(5, 2));
    // Non-playable square.
    client.click_cell(coord!(0, 0));
    assert!(marked_cells(&client).is_empty());
    assert!(drain(&rx).is_empty());
}

#[test]
fn destination_of_another_piece_is_not_a_move() {
    let (mut client, rx) = loaded_client();
    client.click_cell(coord!(5, 0));
    // (4, 3) is reachable from (5, 2) and (5, 4), but not from the selected piece.
    client.click_cell(coord!(4, 3));
    assert!(drain(&rx).is_empty());
    assert!(marked_cells(&client).is_empty());
}

#[test]
fn hovered_destination_is_not_a_move() {
    let (mut client, rx) = loaded_client();
    client.hover_enter(coord!(5, 2));
    client.click_cell(coord!(4, 3));
    assert!(drain(&rx).is_empty());
}

#[test]
fn click_outside_board_clears_selection() {
    let (mut client, rx) = loaded_client();
    client.click_cell(coord!(5, 4));
    client.click_outside();
    assert_eq!(client.ui().selected(), None);
    assert!(marked_cells(&client).is_empty());
    client.click_cell(coord!(4, 5));
    assert!(drain(&rx).is_empty());
}

#[test]
fn hover_leave_clears_everything() {
    let (mut client, _rx) = loaded_client();
    client.hover_enter(coord!(5, 0));
    client.hover_enter(coord!(5, 6));
    assert_eq!(client.ui().hover_highlight(), &[coord!(4, 1), coord!(4, 5), coord!(4, 7)]);
    // Leaving is reported for a different cell than the ones entered.
    client.hover_leave();
    assert!(client.ui().hover_highlight().is_empty());
    assert!(marked_cells(&client).is_empty());
}

#[test]
fn control_actions() {
    let (mut client, rx) = loaded_client();
    client.reset_game();
    client.change_side();
    assert_eq!(drain(&rx), vec![ControlRequest::Reset, ControlRequest::ChangeSide]);
    assert!(client.is_busy());
}

#[test]
fn new_snapshot_replaces_state_and_clears_selection() {
    let (mut client, _rx) = loaded_client();
    client.click_cell(coord!(5, 2));
    client.hover_enter(coord!(5, 2));
    let reply = json!({
        "4": { "3": "piece white" },
        "rotate": 1,
        "valid_moves": { "y_4 x_3": ["y_3 x_2"] },
    });
    client.process_server_response(&reply.to_string()).unwrap();
    assert_eq!(client.snapshot(), &BoardSnapshot::from_json(&reply).unwrap());
    assert!(marked_cells(&client).is_empty());
    assert!(client.board()[coord!(5, 2)].is_empty());
    assert!(!client.valid_moves().contains_origin(coord!(5, 2)));
}

#[test]
fn overlapping_responses_last_wins() {
    let (mut client, rx) = loaded_client();
    client.reset_game();
    client.change_side();
    assert_eq!(drain(&rx).len(), 2);
    let first = json!({ "0": { "1": "piece black" }, "rotate": 0 });
    let second = json!({ "0": { "1": "piece black king" }, "rotate": 1 });
    client.process_server_response(&second.to_string()).unwrap();
    client.process_server_response(&first.to_string()).unwrap();
    assert_eq!(client.snapshot(), &BoardSnapshot::from_json(&first).unwrap());
}

#[test]
fn transport_failure_keeps_board() {
    let (mut client, rx) = loaded_client();
    let before = client.snapshot().clone();
    client.click_cell(coord!(5, 2));
    client.click_cell(coord!(4, 1));
    assert_eq!(drain(&rx).len(), 1);

    let err = client.process_transport_failure(ClientError::Transport("HTTP 500".to_owned()));
    assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
    assert_eq!(client.snapshot(), &before);
    assert!(client.is_busy());
}

#[test]
fn unusable_response_is_a_failure() {
    let (mut client, _rx) = loaded_client();
    let before = client.snapshot().clone();
    client.reset_game();
    let err = client.process_server_response("Bad Gateway").unwrap_err();
    assert!(matches!(err, ClientError::Payload(_)));
    assert_eq!(err.user_message(), "Oops, server error. Game was lost.");
    assert_eq!(client.snapshot(), &before);
    assert!(client.is_busy());
}

#[test]
fn dropped_receiver_does_not_panic() {
    let (mut client, rx) = loaded_client();
    drop(rx);
    client.reset_game();
    assert!(client.is_busy());
}
