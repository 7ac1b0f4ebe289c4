use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        catalog::{build_catalog, mark_favorites, search_recipes},
        entities::{Recipe, RecipeMatch},
        helpers::adapt_documents,
        ports::{RecipeCatalogService, RecipeRepository},
        scoring::score,
        value_objects::{BuildCatalogInput, GetRecipeMatchInput},
    },
};

impl<RR> RecipeCatalogService for Service<RR>
where
    RR: RecipeRepository,
{
    async fn build_catalog(&self, input: BuildCatalogInput) -> Result<Vec<Recipe>, CoreError> {
        let documents = self.recipe_repository.fetch_all().await?;
        let recipes = adapt_documents(documents);

        let catalog = build_catalog(
            &recipes,
            &input.profile,
            &input.kitchen,
            &self.dietary_tables,
        );
        let catalog = mark_favorites(catalog, &input.favorites);
        let compatible = catalog.len();

        let catalog = match input.query {
            Some(query) => search_recipes(catalog, &query),
            None => catalog,
        };

        info!(
            diet = %input.profile.diet,
            total = recipes.len(),
            compatible,
            shown = catalog.len(),
            "Built recipe catalog"
        );

        Ok(catalog)
    }

    async fn get_recipe_match(&self, input: GetRecipeMatchInput) -> Result<RecipeMatch, CoreError> {
        let document = self
            .recipe_repository
            .get_by_id(&input.recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let recipe = Recipe::try_from(&document)?;
        let result = score(&recipe.ingredients, input.kitchen.items());

        Ok(RecipeMatch {
            recipe: recipe.with_match_percentage(result.match_percentage),
            result,
        })
    }

    async fn list_all_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        let documents = self.recipe_repository.fetch_all().await?;
        Ok(adapt_documents(documents))
    }
}
