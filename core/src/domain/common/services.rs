use std::sync::Arc;

use crate::domain::{profile::tables::DietaryTables, recipe::ports::RecipeRepository};

/// Application service. Each domain adds its own service trait impl on top of
/// this struct (see `domain::recipe::services`).
#[derive(Debug)]
pub struct Service<RR>
where
    RR: RecipeRepository,
{
    pub(crate) recipe_repository: Arc<RR>,
    pub(crate) dietary_tables: Arc<DietaryTables>,
}

impl<RR> Service<RR>
where
    RR: RecipeRepository,
{
    pub fn new(recipe_repository: RR, dietary_tables: DietaryTables) -> Self {
        Self {
            recipe_repository: Arc::new(recipe_repository),
            dietary_tables: Arc::new(dietary_tables),
        }
    }

    pub fn dietary_tables(&self) -> &DietaryTables {
        &self.dietary_tables
    }
}

impl<RR> Clone for Service<RR>
where
    RR: RecipeRepository,
{
    fn clone(&self) -> Self {
        Self {
            recipe_repository: Arc::clone(&self.recipe_repository),
            dietary_tables: Arc::clone(&self.dietary_tables),
        }
    }
}
