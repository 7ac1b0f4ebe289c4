use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Invalid recipe document: {0}")]
    InvalidRecipeDocument(String),

    #[error("Recipe catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}
