use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error types for the wiki application
#[derive(Debug)]
pub enum WikiError {
    Io(io::Error),
    InvalidTitle(String),
    NoEntries,
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            WikiError::InvalidTitle(title) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid entry title: {}", title),
            )
                .into_response(),
            WikiError::NoEntries => {
                (StatusCode::NOT_FOUND, "The wiki has no entries yet").into_response()
            }
            WikiError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
        }
    }
}
