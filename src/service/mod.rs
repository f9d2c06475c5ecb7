use crate::config::Config;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use std::sync::Arc;
use thiserror::Error;

pub mod contact_service;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] crate::persistence::Error),

    /// errors where the addressed entity could not be found
    #[error("not found")]
    NotFound,
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
}

/// building up the service context dependencies here for now
pub fn create_service_context(config: Config, db: DbContext) -> ServiceContext {
    let contact_service = Arc::new(ContactService::new(db.contact_store));

    ServiceContext {
        config,
        contact_service,
    }
}
