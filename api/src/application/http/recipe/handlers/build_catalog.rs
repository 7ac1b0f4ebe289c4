use axum::extract::State;
use cooksmart_core::domain::{
    favorite::FavoriteSet,
    kitchen::KitchenInventory,
    profile::UserDietProfile,
    recipe::{entities::Recipe, ports::RecipeCatalogService, value_objects::BuildCatalogInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::BuildCatalogValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BuildCatalogResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/catalog",
    tag = "recipe",
    summary = "Build recipe catalog",
    description = "Returns the recipes compatible with the given diet and allergies, ranked by how many of their ingredients are already in the kitchen.",
    request_body = BuildCatalogValidator,
    responses(
        (status = 200, body = BuildCatalogResponse)
    )
)]
pub async fn build_catalog(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BuildCatalogValidator>,
) -> Result<Response<BuildCatalogResponse>, ApiError> {
    let recipes = state
        .service
        .build_catalog(BuildCatalogInput {
            profile: UserDietProfile::new(payload.diet, payload.allergies),
            kitchen: KitchenInventory::new(payload.kitchen),
            favorites: FavoriteSet::new(payload.favorites),
            query: payload.query,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BuildCatalogResponse { data: recipes }))
}
