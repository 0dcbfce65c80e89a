use std::sync::Arc;

use domain_request::service::RequestRecordService;
use service_request::RequestRecordServiceImpl;

use super::{config::RtsConfig, database::Database, database::OrmRepo};

/// Owns the process wide handles and builds request scoped services from them.
pub struct ServiceProvider {
    config: RtsConfig,
    database: Arc<Database>,
}

impl ServiceProvider {
    /// Connects to the database and, unless disabled, migrates it before anything is served.
    pub async fn build(config: RtsConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::connect(&config.common.db).await?);
        if config.common.db.auto_migrate {
            database.migrate().await?;
            tracing::info!("Database schema is up to date.");
        }
        Ok(Self::with_database(config, database))
    }

    pub fn with_database(config: RtsConfig, database: Arc<Database>) -> Self {
        Self { config, database }
    }

    pub fn config(&self) -> &RtsConfig {
        &self.config
    }

    /// A fresh repository, so buffered statements never leak between requests.
    pub fn orm_repository(&self) -> Arc<OrmRepo> {
        Arc::new(OrmRepo::builder().db(self.database.clone()).build())
    }

    pub fn request_record_service(&self) -> Arc<dyn RequestRecordService> {
        let request_config = &self.config.request;
        Arc::new(
            RequestRecordServiceImpl::builder()
                .request_record_repository(self.orm_repository())
                .transition_policy(request_config.transition_policy)
                .employee_id_attempts(request_config.employee_id_attempts)
                .build(),
        )
    }
}
