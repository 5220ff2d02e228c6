use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

use crate::catalog::StationId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Station {0} not found")]
    NotFound(StationId),

    #[error("{0}")]
    InternalFault(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Catalog deserialization error: {0}")]
    CatalogDeserializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            warn!("Request rejected ({status}): {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_client_statuses() {
        assert_eq!(
            Error::InvalidRequest("Missing station parameter".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::NotFound(StationId::MAX).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::InternalFault("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_station() {
        assert_eq!(Error::NotFound(StationId::MAX).to_string(), "Station 9 not found");
    }
}
