use database_model::system::prelude::*;
use domain_request::{
    exception::RequestException,
    model::entity::{RequestRecord, RequestStatus},
    repository::RequestRecordRepo,
};
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ActiveValue, QueryOrder, QuerySelect, QueryTrait, SqlErr};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl RequestRecordRepo for OrmRepo {
    async fn get_all(&self) -> anyhow::Result<Vec<RequestRecord>> {
        let res = RequestEntity::find()
            .order_by_desc(RequestColumn::CreatedAt)
            .order_by_desc(RequestColumn::Id)
            .all(self.db.get_connection())
            .await?;
        Ok(res.into_iter().map(RequestRecord::from).collect())
    }

    async fn get_by_employee_id(
        &self,
        employee_id: &str,
    ) -> anyhow::Result<Option<RequestRecord>> {
        Ok(RequestEntity::find()
            .filter(RequestColumn::EmployeeId.eq(employee_id))
            .one(self.db.get_connection())
            .await?
            .map(RequestRecord::from))
    }

    async fn insert(&self, entity: &RequestRecord) -> anyhow::Result<RequestRecord> {
        let active_model: RequestActiveModel = RequestModel::from(entity.to_owned()).into();
        let mut active_model = active_model.reset_all();
        active_model.id = ActiveValue::NotSet;
        match active_model.insert(self.db.get_connection()).await {
            Ok(model) => Ok(model.into()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RequestException::EmployeeIdTaken {
                    employee_id: entity.employee_id.to_owned(),
                }
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, entity: &RequestRecord) -> anyhow::Result<()> {
        let active_model = RequestActiveModel {
            id: ActiveValue::Unchanged(entity.id),
            status: ActiveValue::Set(entity.status.to_string()),
            service_started_at: ActiveValue::Set(entity.service_started_at),
            service_completed_at: ActiveValue::Set(entity.service_completed_at),
            ..Default::default()
        };
        let stmt = RequestEntity::update(active_model)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn count_by_status(&self) -> anyhow::Result<Vec<(RequestStatus, u64)>> {
        let rows: Vec<(String, i64)> = RequestEntity::find()
            .select_only()
            .column(RequestColumn::Status)
            .column_as(Expr::col(RequestColumn::Id).count(), "count")
            .group_by(RequestColumn::Status)
            .into_tuple()
            .all(self.db.get_connection())
            .await?;
        Ok(rows
            .into_iter()
            .map(|(status, count)| (status.into(), u64::try_from(count).unwrap_or_default()))
            .collect())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
