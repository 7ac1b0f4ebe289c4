use axum::extract::State;
use cooksmart_core::domain::recipe::{entities::Recipe, ports::RecipeCatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List all recipes",
    description = "Lists every stored recipe in store order, without diet filtering or scoring. Meant as a fallback when the user profile is unavailable.",
    responses(
        (status = 200, body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_all_recipes()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse { data: recipes }))
}
