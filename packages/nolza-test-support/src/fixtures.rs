//! Catalog fixtures built from bare slugs.

use nolza::GameCatalog;
use serde_json::json;

/// Catalog whose games carry only the given slugs plus placeholder text.
pub fn catalog_of(slugs: &[&str]) -> GameCatalog {
    let games: Vec<_> = slugs
        .iter()
        .map(|slug| {
            json!({
                "slug": slug,
                "title": slug.to_uppercase(),
                "tagline": format!("{slug} tagline"),
                "overview": { "players": "2+", "drinks": "Any", "materials": "None" },
                "instructions": [
                    { "id": format!("{slug}-1"), "title": "Gameplay", "description": ["Play."] }
                ]
            })
        })
        .collect();
    GameCatalog::from_json_str(&json!({ "games": games }).to_string())
        .expect("fixture slugs must be unique and non-empty")
}

/// The three-game catalog used by walkthrough tests.
pub fn abc_catalog() -> GameCatalog {
    catalog_of(&["a", "b", "c"])
}
