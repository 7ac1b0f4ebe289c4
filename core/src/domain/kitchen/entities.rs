use serde::{Deserialize, Serialize};

use crate::domain::kitchen::errors::KitchenError;

/// Ingredients the user says they own, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KitchenInventory {
    items: Vec<String>,
}

impl KitchenInventory {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds a trimmed ingredient name. Duplicates are detected on the exact
    /// trimmed text.
    pub fn add(&mut self, name: &str) -> Result<(), KitchenError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KitchenError::EmptyIngredient);
        }
        if self.items.iter().any(|item| item == name) {
            return Err(KitchenError::DuplicateIngredient(name.to_string()));
        }

        self.items.push(name.to_string());
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<String, KitchenError> {
        let position = self
            .items
            .iter()
            .position(|item| item == name)
            .ok_or_else(|| KitchenError::IngredientNotFound(name.to_string()))?;

        Ok(self.items.remove(position))
    }
}

impl From<Vec<String>> for KitchenInventory {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<String> for KitchenInventory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
