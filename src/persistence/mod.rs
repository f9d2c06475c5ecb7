use crate::config::Config;
use contact::ContactStoreApi;
use db::{contact::SurrealContactStore, get_surreal_db};
use std::sync::Arc;
use thiserror::Error;

pub mod contact;
pub mod db;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("SurrealDB connection error {0}")]
    SurrealConnection(#[from] surrealdb::Error),

    #[error("Failed to insert into database: {0}")]
    InsertFailed(String),

    #[error("no such {0} entity {1}")]
    NoSuchEntity(String, String),
}

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the DbContext with the given SurrealDB configuration.
pub async fn get_db_context(conf: &Config) -> Result<DbContext> {
    let db = get_surreal_db(
        &conf.surreal_db_connection,
        &conf.surreal_db_namespace,
        &conf.surreal_db_database,
    )
    .await?;

    let contact_store = Arc::new(SurrealContactStore::new(db));

    Ok(DbContext { contact_store })
}
