use crate::model::entity::RequestStatus;

pub type RequestResult<T> = Result<T, RequestException>;

#[derive(Debug, thiserror::Error)]
pub enum RequestException {
    #[error("There is no request with employee id: {employee_id}.")]
    NotFound { employee_id: String },

    #[error("Employee id: {employee_id} is already used by another request.")]
    EmployeeIdTaken { employee_id: String },

    #[error("No free employee id was found after {attempts} attempts.")]
    EmployeeIdExhausted { attempts: usize },

    #[error("A request in status: {from} can't be moved to status: {to}.")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Unknown request status: {status}.")]
    UnknownStatus { status: String },

    #[error("Request internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for RequestException {
    fn from(e: anyhow::Error) -> Self {
        RequestException::InternalError { source: e }
    }
}
