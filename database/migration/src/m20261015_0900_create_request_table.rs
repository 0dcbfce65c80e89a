use database_model::system::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{EntityTrait, Schema},
};

pub struct Migration;

const CREATED_AT_INDEX: &str = "idx_request_created_at";

fn get_seaorm_create_stmt<E: EntityTrait>(manager: &SchemaManager, e: E) -> TableCreateStatement {
    let schema = Schema::new(manager.get_database_backend());
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20261015_0900_create_request_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // employee_id carries its unique constraint from the entity definition.
        manager.create_table(get_seaorm_create_stmt(manager, RequestEntity)).await?;
        manager
            .create_index(
                Index::create()
                    .name(CREATED_AT_INDEX)
                    .table(RequestEntity)
                    .col(RequestColumn::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(get_seaorm_drop_stmt(RequestEntity)).await
    }
}
