use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown drift test: {0}")]
    UnknownTest(String),
    #[error("column '{column}' is declared both numerical and categorical")]
    OverlappingRoles { column: String },
    #[error("column '{column}' is listed more than once")]
    DuplicateColumn { column: String },
    #[error("unknown value count layout: {0}")]
    UnknownLayout(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
