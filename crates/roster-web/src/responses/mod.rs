//! Response types.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_core::{ErrorResponse, RosterError};
use tracing::{error, warn};

/// Error code for requests the framework could not decode.
pub const REQUEST_REJECTED: &str = "REQUEST_REJECTED";

/// Application error type for Axum.
///
/// Every variant answers with a plain-text body and attaches an
/// [`ErrorResponse`] extension, which
/// [`crate::middleware::error_page_middleware`] turns into an HTML page.
#[derive(Debug)]
pub enum AppError {
    /// Failure raised by the service or datastore.
    Domain(RosterError),
    /// Form body the framework could not decode.
    Rejected(FormRejection),
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self::Domain(err)
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Domain(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

                // Datastore details stay in the log.
                if err.is_server_error() {
                    error!(code = err.error_code(), error = %err, "Request failed");
                } else {
                    warn!(code = err.error_code(), error = %err, "Request rejected");
                }
                (status, ErrorResponse::from_error(&err))
            }
            Self::Rejected(rejection) => {
                let status = rejection.status();
                warn!(status = status.as_u16(), error = %rejection, "Form rejected");
                (status, ErrorResponse::new(REQUEST_REJECTED, rejection.body_text()))
            }
        };

        let mut response = (status, body.message.clone()).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

/// Result type for Axum handlers.
pub type WebResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(response: &Response) -> &ErrorResponse {
        response.extensions().get::<ErrorResponse>().unwrap()
    }

    #[test]
    fn test_client_error_keeps_message() {
        let response = AppError::from(RosterError::not_found("User", 7)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(attached(&response).code, "NOT_FOUND");
        assert!(attached(&response).message.contains('7'));
    }

    #[test]
    fn test_server_error_hides_details() {
        let response =
            AppError::from(RosterError::integrity("UNIQUE constraint failed: users.username"))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(attached(&response).message, "Internal Server Error");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response =
            AppError::from(RosterError::validation("Missing form field: email")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(attached(&response).code, "VALIDATION_ERROR");
    }
}
