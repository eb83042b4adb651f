// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::sync::mpsc;

use checkers_client::{ClientState, ControlRequest, Coord};
use serde_json::{Map, Value, json};


#[macro_export]
macro_rules! coord {
    ($row:literal, $col:literal) => {
        checkers_client::Coord::from_zero_based($row, $col).unwrap()
    };
}

#[allow(dead_code)]
pub fn is_dark_square(row: u8, col: u8) -> bool { (row + col) % 2 == 1 }

// Starting position the way the server reports it: men on the dark squares of the three rows
// closest to each side, white at the bottom, white to move.
#[allow(dead_code)]
pub fn starting_position_json() -> Value {
    let mut document = Map::new();
    for row in 0..8u8 {
        let mut row_data = Map::new();
        for col in 0..8u8 {
            let label = if !is_dark_square(row, col) {
                "not_game".to_owned()
            } else if row < 3 {
                "piece black".to_owned()
            } else if row > 4 {
                "piece white".to_owned()
            } else {
                "piece empty".to_owned()
            };
            row_data.insert(col.to_string(), Value::String(label));
        }
        document.insert(row.to_string(), Value::Object(row_data));
    }
    document.insert("rotate".to_owned(), json!(0));
    document.insert("user_id".to_owned(), json!(4242));
    document.insert(
        "valid_moves".to_owned(),
        json!({
            "y_5 x_0": ["y_4 x_1"],
            "y_5 x_2": ["y_4 x_1", "y_4 x_3"],
            "y_5 x_4": ["y_4 x_3", "y_4 x_5"],
            "y_5 x_6": ["y_4 x_5", "y_4 x_7"],
        }),
    );
    Value::Object(document)
}

#[allow(dead_code)]
pub fn starting_position_body() -> String { starting_position_json().to_string() }

#[allow(dead_code)]
pub fn loaded_client() -> (ClientState, mpsc::Receiver<ControlRequest>) {
    let (tx, rx) = mpsc::channel();
    let mut client = ClientState::new(tx);
    client.begin_initial_load();
    client.process_server_response(&starting_position_body()).unwrap();
    (client, rx)
}

#[allow(dead_code)]
pub fn drain(rx: &mpsc::Receiver<ControlRequest>) -> Vec<ControlRequest> { rx.try_iter().collect() }

#[allow(dead_code)]
pub fn marked_cells(client: &ClientState) -> Vec<Coord> {
    Coord::all()
        .filter(|&coord| client.markers(coord) != Default::default())
        .collect()
}
