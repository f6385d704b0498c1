use thiserror::Error;
use uuid::Uuid;

/// Error type that captures the dashboard's recoverable failures.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No data to export: {0}")]
    NoData(&'static str),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Record not found: {0}")]
    NotFound(Uuid),
}
