//! Read-only game catalog keyed by slug.
//!
//! The bundled catalog is embedded at compile time and deserialized with serde.
//! Alternative catalogs can be loaded from a JSON file with the same shape.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

const BUILTIN_GAMES_JSON: &str = include_str!("../data/games.json");

/// Summary shown on the overview card of a game screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub players: String,
    pub drinks: String,
    pub materials: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub id: String,
    pub title: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedRule {
    pub id: String,
    pub title: String,
    pub description: Vec<String>,
}

/// A single game entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub overview: Overview,
    pub instructions: Vec<InstructionStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_rules: Vec<ExtendedRule>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    games: Vec<GameRecord>,
}

/// Anything that can enumerate the slugs eligible for shuffling.
///
/// Order matters only for determinism under a seeded RNG.
pub trait SlugSource {
    fn slugs(&self) -> Vec<&str>;
}

impl<S: AsRef<str>> SlugSource for [S] {
    fn slugs(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>> SlugSource for Vec<S> {
    fn slugs(&self) -> Vec<&str> {
        self.as_slice().slugs()
    }
}

/// Ordered collection of games with slug lookup.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    games: Vec<GameRecord>,
    by_slug: HashMap<String, usize>,
}

impl GameCatalog {
    /// Build a catalog from records, rejecting empty or duplicate slugs.
    pub fn new(games: Vec<GameRecord>) -> Result<Self, DomainError> {
        let mut by_slug = HashMap::with_capacity(games.len());
        for (idx, game) in games.iter().enumerate() {
            if game.slug.trim().is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::EmptySlug,
                    format!("game at position {idx} has an empty slug"),
                ));
            }
            if by_slug.insert(game.slug.clone(), idx).is_some() {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateSlug,
                    format!("slug '{}' appears more than once", game.slug),
                ));
            }
        }
        Ok(Self { games, by_slug })
    }

    /// The games bundled with the app.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json_str(BUILTIN_GAMES_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| DomainError::infra(InfraErrorKind::Parse, e.to_string()))?;
        Self::new(file.games)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                DomainError::not_found(NotFoundKind::CatalogFile, path.display().to_string())
            }
            _ => DomainError::infra(InfraErrorKind::Io, format!("{}: {e}", path.display())),
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, slug: &str) -> Option<&GameRecord> {
        self.by_slug.get(slug).map(|&idx| &self.games[idx])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl SlugSource for GameCatalog {
    fn slugs(&self) -> Vec<&str> {
        self.games.iter().map(|g| g.slug.as_str()).collect()
    }
}
