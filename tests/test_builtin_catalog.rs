use recipe_finder::{find_recipes, Catalog, RecipeMatcher};

#[test]
fn test_builtin_ids_are_unique_and_resolvable() {
    let catalog = Catalog::builtin().unwrap();
    for recipe in catalog.recipes() {
        assert_eq!(catalog.get(&recipe.id), Some(recipe));
    }
}

#[test]
fn test_find_recipes_in_builtin_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let titles: Vec<String> = find_recipes("Turmeric Powder, tomato, onion", &catalog)
        .into_iter()
        .map(|r| r.title)
        .collect();

    assert_eq!(
        titles,
        ["Paneer Butter Masala", "Dal Tadka", "Chana Masala"]
    );
}

#[test]
fn test_find_recipes_needs_three_ingredients() {
    let catalog = Catalog::builtin().unwrap();
    assert!(find_recipes("tomato, onion", &catalog).is_empty());
    assert!(find_recipes("", &catalog).is_empty());
}

#[test]
fn test_every_builtin_match_meets_threshold() {
    let catalog = Catalog::builtin().unwrap();
    let matcher = RecipeMatcher::default();
    let query = recipe_finder::normalize("onion, salt, ghee, green chilli, turmeric powder");

    let matches = matcher.find_matches(&query, catalog.recipes());

    assert!(!matches.is_empty());
    assert!(matches.iter().all(|r| matcher.overlap(&query, r) >= 3));
}
