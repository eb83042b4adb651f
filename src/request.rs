use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::coord::Coord;


// Sentinel values the server maps onto its reset / change side actions.
pub const RESET_ACTION: i32 = -1;
pub const CHANGE_SIDE_ACTION: i32 = -2;


// Whole body of a control POST.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlRequest {
    Move { from: Coord, to: Coord },
    Reset,
    ChangeSide,
}

impl Serialize for ControlRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ControlRequest::Move { from, to } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("move_from", &from.to_cell_key())?;
                map.serialize_entry("move_to", &to.to_cell_key())?;
                map.end()
            }
            ControlRequest::Reset => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("reset", &RESET_ACTION)?;
                map.end()
            }
            ControlRequest::ChangeSide => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("changeSide", &CHANGE_SIDE_ACTION)?;
                map.end()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn move_body() {
        let request = ControlRequest::Move {
            from: Coord::from_zero_based(5, 0).unwrap(),
            to: Coord::from_zero_based(4, 1).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "move_from": "y_5 x_0", "move_to": "y_4 x_1" })
        );
    }

    #[test]
    fn control_bodies() {
        assert_eq!(serde_json::to_value(ControlRequest::Reset).unwrap(), json!({ "reset": -1 }));
        assert_eq!(
            serde_json::to_value(ControlRequest::ChangeSide).unwrap(),
            json!({ "changeSide": -2 })
        );
    }
}
