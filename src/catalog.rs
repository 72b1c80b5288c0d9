//! The read-only recipe catalog.

use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};

use crate::error::FinderError;
use crate::model::Recipe;

const BUILTIN_CATALOG: &str = include_str!("../data/recipes.json");

/// Recipes available to search, in display order. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog from recipes, rejecting duplicate ids.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, FinderError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(FinderError::DuplicateRecipeId(recipe.id.clone()));
            }
        }
        Ok(Catalog { recipes })
    }

    /// The catalog embedded at build time.
    pub fn builtin() -> Result<Self, FinderError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, FinderError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        debug!("Parsed {} catalog recipes", recipes.len());
        Self::new(recipes)
    }

    /// Load a catalog from a JSON file containing an array of recipes.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, FinderError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        info!("Loaded {} recipes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id, e.g. when a result card is opened.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
