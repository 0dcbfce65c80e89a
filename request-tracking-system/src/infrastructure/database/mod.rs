mod orm;

pub use orm::OrmRepo;

use anyhow::Context;
use database_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection};

use super::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(config.url.to_owned());
        options.max_connections(config.max_connections).sqlx_logging(false);
        let connection = sea_orm::Database::connect(options)
            .await
            .context("Could not connect to database")?;
        Ok(Database { connection })
    }

    /// Applies pending migrations, already applied ones are skipped.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        Migrator::up(&self.connection, None).await.context("Could not migrate database")
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
