use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Recipe ids the user has favorited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<String>,
}

impl FavoriteSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.ids.contains(recipe_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flips the favorite state of `recipe_id` and returns the new state.
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        if self.ids.remove(recipe_id) {
            false
        } else {
            self.ids.insert(recipe_id.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut favorites = FavoriteSet::default();
        assert!(favorites.toggle("r1"));
        assert!(favorites.contains("r1"));
        assert!(!favorites.toggle("r1"));
        assert!(!favorites.contains("r1"));
        assert!(favorites.is_empty());
    }
}
