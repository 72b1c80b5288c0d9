use log::debug;

use crate::model::Recipe;
use crate::normalizer::IngredientQuery;

/// Minimum overlap for a recipe to match, and minimum token count for a query
/// to be searchable.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Selects catalog recipes sharing at least `threshold` ingredients with a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeMatcher {
    threshold: usize,
}

impl Default for RecipeMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RecipeMatcher {
    pub fn new(threshold: usize) -> Self {
        RecipeMatcher { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of query tokens the recipe lists.
    pub fn overlap(&self, query: &IngredientQuery, recipe: &Recipe) -> usize {
        query
            .tokens()
            .iter()
            .filter(|token| recipe.uses(token))
            .count()
    }

    /// Overlap count for every recipe, in catalog order.
    pub fn match_counts<'a>(
        &self,
        query: &IngredientQuery,
        recipes: &'a [Recipe],
    ) -> Vec<(&'a Recipe, usize)> {
        recipes
            .iter()
            .map(|recipe| (recipe, self.overlap(query, recipe)))
            .collect()
    }

    /// Recipes whose overlap reaches the threshold, in catalog order.
    ///
    /// Results are not ranked by overlap. An empty query never matches.
    pub fn find_matches(&self, query: &IngredientQuery, recipes: &[Recipe]) -> Vec<Recipe> {
        if query.is_empty() {
            return Vec::new();
        }

        let matches: Vec<Recipe> = self
            .match_counts(query, recipes)
            .into_iter()
            .filter(|(_, overlap)| *overlap >= self.threshold)
            .map(|(recipe, _)| recipe.clone())
            .collect();

        debug!(
            "{} of {} recipes share at least {} ingredients with {:?}",
            matches.len(),
            recipes.len(),
            self.threshold,
            query.tokens()
        );
        matches
    }
}
