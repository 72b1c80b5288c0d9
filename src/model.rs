use serde::{Deserialize, Serialize};

/// A read-only catalog entry.
///
/// The same shape is written to session storage under `suggestedRecipes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        ingredients: &[&str],
    ) -> Self {
        Recipe {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Whether the recipe lists `token`, ignoring case and surrounding whitespace.
    pub fn uses(&self, token: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.trim().to_lowercase() == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_is_case_insensitive() {
        let recipe = Recipe::new("1", "Dal", "dal.jpg", &["Turmeric Powder", " Lentils "]);
        assert!(recipe.uses("turmeric powder"));
        assert!(recipe.uses("lentils"));
        assert!(!recipe.uses("turmeric"));
    }

    #[test]
    fn test_serialized_field_names() {
        let recipe = Recipe::new("7", "Soup", "soup.jpg", &["water"]);
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["title"], "Soup");
        assert_eq!(json["image"], "soup.jpg");
        assert_eq!(json["ingredients"][0], "water");
    }
}
