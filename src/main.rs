use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::debug;
use recipe_finder::{
    load_catalog, Catalog, FileStore, FinderError, Recipe, RecipeMatcher, SearchOutcome,
    SearchSession, SessionStore, Settings, Slideshow,
};

#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(about = "Find recipes that use at least three of your ingredients", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalog with a comma-separated ingredient list
    Search {
        /// e.g. "turmeric powder, tomato, onion"
        ingredients: String,
    },

    /// Show the last search of this session without searching again
    Show,

    /// Show one recipe from the catalog
    Recipe {
        /// Recipe id
        id: String,
    },

    /// End the session and forget the last search
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = Settings::load().map_err(FinderError::from)?;
    debug!("{:#?}", settings);

    match cli.command {
        Commands::Search { ingredients } => {
            let catalog = Arc::new(load_catalog(&settings).await?);
            let store = FileStore::open(&settings.session_file)?;
            let mut session = SearchSession::restore(catalog, store, &settings);
            session.set_input(ingredients);

            if cli.verbose {
                let query = recipe_finder::normalize(session.input());
                let matcher = RecipeMatcher::new(settings.threshold);
                for (recipe, overlap) in matcher.match_counts(&query, session.catalog().recipes()) {
                    debug!("{} ({}): overlap {}", recipe.title, recipe.id, overlap);
                }
            }

            eprintln!("Searching...");
            match session.search().await {
                SearchOutcome::Matched(_) => print_cards(session.results()),
                SearchOutcome::NoMatches | SearchOutcome::TooFewIngredients { .. } => {
                    if let Some(advisory) = session.popup() {
                        println!("{}", advisory.message());
                    }
                }
                SearchOutcome::Cancelled => println!("Search cancelled."),
            }
        }
        Commands::Show => {
            let catalog = Arc::new(Catalog::default());
            let store = FileStore::open(&settings.session_file)?;
            let session = SearchSession::restore(catalog, store, &settings);

            if session.shows_default_view() {
                if let Some(slide) = Slideshow::default().current() {
                    println!("{}", slide.caption);
                }
            } else {
                println!("Ingredients: {}", session.input());
                print_cards(session.results());
            }
        }
        Commands::Recipe { id } => {
            let catalog = load_catalog(&settings).await?;
            let recipe = catalog
                .get(&id)
                .ok_or_else(|| FinderError::RecipeNotFound(id.clone()))?;
            print_recipe(recipe);
        }
        Commands::Clear => {
            let mut store = FileStore::open(&settings.session_file)?;
            store.clear()?;
            println!("Session cleared.");
        }
    }

    Ok(())
}

fn print_cards(recipes: &[Recipe]) {
    for recipe in recipes {
        println!("[{}] {}  ({})", recipe.id, recipe.title, recipe.image);
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("Image: {}", recipe.image);
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
}
