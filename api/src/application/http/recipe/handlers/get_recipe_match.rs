use axum::extract::{Path, State};
use cooksmart_core::domain::{
    kitchen::KitchenInventory,
    recipe::{
        entities::RecipeMatch, ports::RecipeCatalogService, value_objects::GetRecipeMatchInput,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::RecipeMatchValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeMatchResponse {
    pub data: RecipeMatch,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/match",
    tag = "recipe",
    summary = "Match a recipe against a kitchen",
    description = "Scores one recipe against the kitchen and lists the ingredients still missing, in recipe order.",
    params(
        ("recipe_id" = String, Path, description = "Recipe id"),
    ),
    request_body = RecipeMatchValidator,
    responses(
        (status = 200, body = GetRecipeMatchResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe_match(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeMatchValidator>,
) -> Result<Response<GetRecipeMatchResponse>, ApiError> {
    let recipe_match = state
        .service
        .get_recipe_match(GetRecipeMatchInput {
            recipe_id,
            kitchen: KitchenInventory::new(payload.kitchen),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeMatchResponse { data: recipe_match }))
}
