#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board_state;
pub mod cell;
pub mod client;
pub mod config;
pub mod coord;
pub mod error;
pub mod request;
pub mod selection;

pub use board_state::{BoardOrientation, BoardSnapshot, BoardState, ValidMoves};
pub use cell::{CellLabel, Force, Piece, PieceKind};
pub use client::{CellView, ClientState};
pub use config::ClientConfig;
pub use coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
pub use error::{ClientError, PayloadError, SERVER_ERROR_MESSAGE};
pub use request::ControlRequest;
pub use selection::{BoardUi, CellMarkers};
