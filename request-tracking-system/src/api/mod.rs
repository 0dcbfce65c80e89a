use actix_web::http::StatusCode;
use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse, ResponseError};
use domain_request::exception::RequestException;

use dtos::FailureResponse;

pub mod dtos;
pub mod request;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestException),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Request(e) => match e {
                RequestException::NotFound { .. } => StatusCode::NOT_FOUND,
                RequestException::EmployeeIdTaken { .. }
                | RequestException::InvalidTransition { .. } => StatusCode::CONFLICT,
                RequestException::UnknownStatus { .. } => StatusCode::BAD_REQUEST,
                RequestException::EmployeeIdExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
                RequestException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("{self:?}");
            match self {
                ApiError::Request(RequestException::InternalError { .. }) => {
                    "Internal server error.".to_string()
                }
                _ => self.to_string(),
            }
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(FailureResponse::new(message))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidBody(err.to_string()).into()
}

/// Empty answer to `OPTIONS` on any api path, the cors headers are added by middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
