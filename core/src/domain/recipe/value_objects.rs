use crate::domain::{
    favorite::FavoriteSet, kitchen::KitchenInventory, profile::UserDietProfile,
};

#[derive(Debug, Clone, Default)]
pub struct BuildCatalogInput {
    pub profile: UserDietProfile,
    pub kitchen: KitchenInventory,
    pub favorites: FavoriteSet,
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetRecipeMatchInput {
    pub recipe_id: String,
    pub kitchen: KitchenInventory,
}
