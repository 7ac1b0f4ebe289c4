use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CooksmartConfig {
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// JSON file holding the recipe documents served by the catalog.
    pub recipes_file: PathBuf,
}
