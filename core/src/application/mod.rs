use tracing::info;

use crate::{
    domain::{
        common::{CooksmartConfig, entities::app_errors::CoreError, services::Service},
        profile::DietaryTables,
    },
    infrastructure::recipe::InMemoryRecipeRepository,
};

pub type CooksmartService = Service<InMemoryRecipeRepository>;

pub async fn create_service(config: CooksmartConfig) -> Result<CooksmartService, CoreError> {
    let recipe_repository =
        InMemoryRecipeRepository::from_json_file(&config.catalog.recipes_file).await?;

    if recipe_repository.is_empty() {
        info!("Recipe file is empty, the catalog will be empty");
    }

    Ok(Service::new(recipe_repository, DietaryTables::standard()))
}
