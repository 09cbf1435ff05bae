use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[from] model::Error),
    #[error("path rejected: {0}")]
    Path(#[from] PathRejection),
    #[error("query string rejected: {0}")]
    Query(#[from] QueryRejection),
    #[error("missing query parameter: {0}")]
    MissingQueryParam(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use model::Error as ModelError;

        match self {
            Error::Model(
                er @ (ModelError::ActivityNotFound | ModelError::ParticipantNotFound),
            ) => (StatusCode::NOT_FOUND, ClientError::NotFound(er.to_string())),
            Error::Model(er @ ModelError::AlreadySignedUp) => {
                (StatusCode::BAD_REQUEST, ClientError::BadRequest(er.to_string()))
            }
            Error::Path(rejection) => (
                StatusCode::BAD_REQUEST,
                ClientError::InvalidInput(rejection.body_text()),
            ),
            Error::Query(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ClientError::InvalidInput(rejection.body_text()),
            ),
            Error::MissingQueryParam(param) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ClientError::InvalidInput(format!("missing query parameter `{param}`")),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ClientError::ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error as the client sees it. Its `Display` is the `detail` of the error body.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("{_0}")]
    NotFound(String),
    #[display("{_0}")]
    BadRequest(String),
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
    #[display("Service Error!")]
    ServiceError,
}
