use std::path::Path;

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::RecipeDocument, ports::RecipeRepository},
};

/// Recipe documents held in memory, typically loaded once from a JSON export
/// of the document store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    documents: Vec<RecipeDocument>,
}

impl InMemoryRecipeRepository {
    pub fn new(documents: Vec<RecipeDocument>) -> Self {
        Self { documents }
    }

    /// Reads a JSON array of `{"id": ..., "data": {...}}` documents.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read recipe file {}: {}", path.display(), e);
            CoreError::CatalogUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;

        let documents: Vec<RecipeDocument> = serde_json::from_str(&raw).map_err(|e| {
            error!("Failed to parse recipe file {}: {}", path.display(), e);
            CoreError::CatalogUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;

        info!(
            "Loaded {} recipe documents from {}",
            documents.len(),
            path.display()
        );
        Ok(Self::new(documents))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn fetch_all(&self) -> Result<Vec<RecipeDocument>, CoreError> {
        Ok(self.documents.clone())
    }

    async fn get_by_id(&self, recipe_id: &str) -> Result<Option<RecipeDocument>, CoreError> {
        Ok(self
            .documents
            .iter()
            .find(|document| document.id == recipe_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_get_by_id() {
        let repository = InMemoryRecipeRepository::new(vec![
            RecipeDocument::new("a", json!({"title": "A"})),
            RecipeDocument::new("b", json!({"title": "B"})),
        ]);

        let found = repository.get_by_id("b").await.unwrap();
        assert_eq!(found.map(|d| d.id), Some("b".to_string()));
        assert!(repository.get_by_id("zzz").await.unwrap().is_none());
        assert_eq!(repository.fetch_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "r1", "data": {{"title": "Toast", "ingredients": "[\"bread\"]"}}}}]"#
        )
        .unwrap();

        let repository = InMemoryRecipeRepository::from_json_file(file.path())
            .await
            .unwrap();
        assert_eq!(repository.len(), 1);
        let document = repository.get_by_id("r1").await.unwrap().unwrap();
        assert_eq!(document.data["title"], "Toast");
    }

    #[tokio::test]
    async fn test_missing_file_is_catalog_unavailable() {
        let result = InMemoryRecipeRepository::from_json_file("/nonexistent/recipes.json").await;
        assert!(matches!(result, Err(CoreError::CatalogUnavailable(_))));
    }
}
