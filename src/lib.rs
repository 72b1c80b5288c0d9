pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalizer;
pub mod session;
pub mod slideshow;
pub mod store;

pub use catalog::Catalog;
pub use config::Settings;
pub use error::FinderError;
pub use matcher::{RecipeMatcher, DEFAULT_THRESHOLD};
pub use model::Recipe;
pub use normalizer::{normalize, IngredientQuery, InputStrength};
pub use session::{Advisory, SearchCanceller, SearchOutcome, SearchSession, SearchState};
pub use slideshow::{Slide, Slideshow};
pub use store::{FileStore, MemoryStore, SessionKey, SessionStore};

/// Recipes in `catalog` sharing at least three ingredients with `input`.
///
/// No delay and no session; inputs with fewer than three ingredients simply
/// match nothing.
///
/// # Example
/// ```
/// use recipe_finder::{find_recipes, Catalog};
///
/// let catalog = Catalog::builtin().unwrap();
/// let recipes = find_recipes("paneer, tomato, onion", &catalog);
/// assert!(recipes.iter().any(|r| r.title == "Paneer Butter Masala"));
/// ```
pub fn find_recipes(input: &str, catalog: &Catalog) -> Vec<Recipe> {
    RecipeMatcher::default().find_matches(&normalize(input), catalog.recipes())
}

/// Load the catalog named by `settings`, or the embedded one.
pub async fn load_catalog(settings: &Settings) -> Result<Catalog, FinderError> {
    match &settings.catalog_path {
        Some(path) => Catalog::from_path(path).await,
        None => Catalog::builtin(),
    }
}
