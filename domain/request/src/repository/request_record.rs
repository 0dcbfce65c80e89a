use async_trait::async_trait;

use crate::model::entity::{RequestRecord, RequestStatus};

#[async_trait]
pub trait RequestRecordRepo: Send + Sync {
    /// All records, newest `created_at` first
    async fn get_all(&self) -> anyhow::Result<Vec<RequestRecord>>;
    async fn get_by_employee_id(&self, employee_id: &str)
        -> anyhow::Result<Option<RequestRecord>>;
    /// Inserts right away and returns the stored record.
    ///
    /// A clash on the employee id fails with
    /// [`RequestException::EmployeeIdTaken`](crate::exception::RequestException::EmployeeIdTaken).
    async fn insert(&self, entity: &RequestRecord) -> anyhow::Result<RequestRecord>;
    /// Queues the status columns of `entity` until `save_changed`
    async fn update(&self, entity: &RequestRecord) -> anyhow::Result<()>;
    /// Stored status strings with their record counts
    async fn count_by_status(&self) -> anyhow::Result<Vec<(RequestStatus, u64)>>;
    /// Commits queued statements, `Ok(false)` when nothing was queued
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
