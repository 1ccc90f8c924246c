//! Service layer orchestrating catalog fetches for the page handlers.

use thiserror::Error;

use crate::client::errors::ClientError;

pub mod detail;
pub mod listing;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product not found")]
    NotFound,

    #[error("catalog error: {0}")]
    Catalog(ClientError),
}

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound => ServiceError::NotFound,
            other => ServiceError::Catalog(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
