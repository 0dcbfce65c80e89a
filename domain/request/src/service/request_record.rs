use async_trait::async_trait;

use crate::exception::RequestResult;
use crate::model::{
    entity::{RequestRecord, RequestStatus},
    vo::{RequestDraft, RequestStats},
};

#[async_trait]
pub trait RequestRecordService: Send + Sync {
    /// Stores a new `pending` record.
    async fn create(&self, draft: RequestDraft) -> RequestResult<RequestRecord>;
    /// Every record, most recent first.
    async fn list(&self) -> RequestResult<Vec<RequestRecord>>;
    /// Sets the status of the record with `employee_id`.
    ///
    /// `None` leaves the record untouched and returns it as is.
    async fn update_status(
        &self,
        employee_id: &str,
        status: Option<RequestStatus>,
    ) -> RequestResult<RequestRecord>;
    /// Counts per recognized status.
    async fn stats(&self) -> RequestResult<RequestStats>;
}
