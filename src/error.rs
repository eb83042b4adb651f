use std::fmt;


// Shown to the user whenever the server cannot be reached or its reply is unusable. The session is
// considered unrecoverable at that point.
pub const SERVER_ERROR_MESSAGE: &str = "Oops, server error. Game was lost.";


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PayloadError {
    InvalidJson(String),
    NotAnObject,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ClientError {
    // The response arrived but could not be interpreted as a board.
    Payload(PayloadError),
    // Network failure or non-success HTTP status.
    Transport(String),
}

impl ClientError {
    pub fn user_message(&self) -> &'static str { SERVER_ERROR_MESSAGE }
}

impl From<PayloadError> for ClientError {
    fn from(err: PayloadError) -> Self { ClientError::Payload(err) }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::InvalidJson(err) => write!(f, "board payload is not valid JSON: {err}"),
            PayloadError::NotAnObject => write!(f, "board payload is not a JSON object"),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Payload(err) => write!(f, "{err}"),
            ClientError::Transport(err) => write!(f, "request failed: {err}"),
        }
    }
}

impl std::error::Error for PayloadError {}
impl std::error::Error for ClientError {}
