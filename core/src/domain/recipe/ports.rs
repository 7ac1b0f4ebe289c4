use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeDocument, RecipeMatch},
        value_objects::{BuildCatalogInput, GetRecipeMatchInput},
    },
};

/// Source of raw recipe documents. Implementations hand back whole snapshots;
/// the catalog never consumes partial results.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<RecipeDocument>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: &str,
    ) -> impl Future<Output = Result<Option<RecipeDocument>, CoreError>> + Send;
}

pub trait RecipeCatalogService: Send + Sync {
    fn build_catalog(
        &self,
        input: BuildCatalogInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe_match(
        &self,
        input: GetRecipeMatchInput,
    ) -> impl Future<Output = Result<RecipeMatch, CoreError>> + Send;

    /// Every adaptable recipe in store order, without filtering or scoring.
    /// Used when the user's profile cannot be loaded.
    fn list_all_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
