use shared_models::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("invalid {0} ID format")]
    InvalidId(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            DatabaseError::NotFound(_) => AppError::NotFound(err.to_string()),
            DatabaseError::Mongo(e) => AppError::Database(e.to_string()),
        }
    }
}
