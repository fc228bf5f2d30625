use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{Error, Result as PortalResult};

/// A failed form submission or request, shown to the user as plain text.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<Error> for PageError {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingField(_) => PageError::bad_request("Please fill all fields"),
            Error::DuplicateEmail => PageError::conflict("Email already registered"),
            Error::AuthRejected => PageError::unauthorized("Invalid login"),
            other => {
                tracing::error!("Request failed: {other}");
                PageError::internal("Internal server error")
            }
        }
    }
}

/// Extension trait for converting portal results into page errors.
pub trait PortalResultExt<T> {
    /// Like `From`, but shows `missing` when a required field was empty.
    fn or_page(self, missing: &'static str) -> Result<T, PageError>;
}

impl<T> PortalResultExt<T> for PortalResult<T> {
    fn or_page(self, missing: &'static str) -> Result<T, PageError> {
        self.map_err(|e| match e {
            Error::MissingField(_) => PageError::bad_request(missing),
            other => PageError::from(other),
        })
    }
}
