use domain_request::model::entity::RequestStatus;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    #[serde(default)]
    pub status: Option<RequestStatus>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
