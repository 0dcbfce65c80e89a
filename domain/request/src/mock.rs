use crate::{
    model::entity::{RequestRecord, RequestStatus},
    repository::RequestRecordRepo,
    service::EmployeeIdGenerator,
};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub RequestRecordRepo {}
    #[async_trait]
    impl RequestRecordRepo for RequestRecordRepo {
        async fn get_all(&self) -> anyhow::Result<Vec<RequestRecord>>;
        async fn get_by_employee_id(&self, employee_id: &str) -> anyhow::Result<Option<RequestRecord>>;
        async fn insert(&self, entity: &RequestRecord) -> anyhow::Result<RequestRecord>;
        async fn update(&self, entity: &RequestRecord) -> anyhow::Result<()>;
        async fn count_by_status(&self) -> anyhow::Result<Vec<(RequestStatus, u64)>>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub EmployeeIdGenerator {}
    impl EmployeeIdGenerator for EmployeeIdGenerator {
        fn generate(&self) -> String;
    }
}
