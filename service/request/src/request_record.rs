use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_request::{
    exception::{RequestException, RequestResult},
    model::{
        entity::{RequestRecord, RequestStatus},
        vo::{RequestDraft, RequestStats, TransitionPolicy},
    },
    repository::RequestRecordRepo,
    service::{EmployeeIdGenerator, RequestRecordService},
};
use typed_builder::TypedBuilder;

use crate::RandomEmployeeIdGenerator;

pub const DEFAULT_EMPLOYEE_ID_ATTEMPTS: usize = 16;

#[derive(TypedBuilder)]
pub struct RequestRecordServiceImpl {
    request_record_repository: Arc<dyn RequestRecordRepo>,
    #[builder(default = Arc::new(RandomEmployeeIdGenerator))]
    employee_id_generator: Arc<dyn EmployeeIdGenerator>,
    #[builder(default)]
    transition_policy: TransitionPolicy,
    /// Inserts tried with freshly generated ids before giving up
    #[builder(default = DEFAULT_EMPLOYEE_ID_ATTEMPTS)]
    employee_id_attempts: usize,
}

#[async_trait]
impl RequestRecordService for RequestRecordServiceImpl {
    async fn create(&self, draft: RequestDraft) -> RequestResult<RequestRecord> {
        let explicit = draft.explicit_employee_id().map(str::to_owned);
        let attempts = match explicit {
            Some(_) => 1,
            None => self.employee_id_attempts.max(1),
        };
        let employee_id =
            explicit.clone().unwrap_or_else(|| self.employee_id_generator.generate());
        let mut record = RequestRecord::from_draft(draft, employee_id, Utc::now());

        for attempt in 1..=attempts {
            let err = match self.request_record_repository.insert(&record).await {
                Ok(stored) => {
                    self.request_record_repository.save_changed().await?;
                    tracing::debug!(employee_id = %stored.employee_id, id = stored.id, "Request created.");
                    return Ok(stored);
                }
                Err(e) => e,
            };
            match err.downcast::<RequestException>() {
                Ok(RequestException::EmployeeIdTaken { employee_id }) if explicit.is_none() => {
                    tracing::warn!(%employee_id, attempt, "Employee id already used, drawing another one.");
                    record.employee_id = self.employee_id_generator.generate();
                }
                Ok(e) => return Err(e),
                Err(e) => return Err(e.into()),
            }
        }
        Err(RequestException::EmployeeIdExhausted { attempts })
    }

    async fn list(&self) -> RequestResult<Vec<RequestRecord>> {
        Ok(self.request_record_repository.get_all().await?)
    }

    async fn update_status(
        &self,
        employee_id: &str,
        status: Option<RequestStatus>,
    ) -> RequestResult<RequestRecord> {
        let mut record = self
            .request_record_repository
            .get_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| RequestException::NotFound {
                employee_id: employee_id.to_owned(),
            })?;
        let Some(status) = status else {
            return Ok(record);
        };
        self.transition_policy.check(&record.status, &status)?;
        record.apply_status(status, Utc::now());
        self.request_record_repository.update(&record).await?;
        self.request_record_repository.save_changed().await?;
        Ok(record)
    }

    async fn stats(&self) -> RequestResult<RequestStats> {
        let mut stats = RequestStats::default();
        for (status, count) in self.request_record_repository.count_by_status().await? {
            stats.record(&status, count);
        }
        Ok(stats)
    }
}
