use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitchenError {
    #[error("Please enter an ingredient name")]
    EmptyIngredient,

    #[error("{0} is already in your kitchen")]
    DuplicateIngredient(String),

    #[error("{0} is not in your kitchen")]
    IngredientNotFound(String),
}
