//! Recommendation catalog
//!
//! The catalog is read once when a command starts and never changes after
//! that. A journal can replace the built-in book list with its own
//! `.solace/catalog.toml`.

use crate::domain::mood::MoodLevel;
use crate::domain::mood::MoodLevel::{Amazing, Down, Good, Okay, Tough};
use crate::error::{Result, SolaceError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Curation category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Motivational,
    Alignment,
    Healing,
    Growth,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Motivational => "motivational",
            Category::Alignment => "alignment",
            Category::Healing => "healing",
            Category::Growth => "growth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Motivational => "Motivational",
            Category::Alignment => "Self-Alignment",
            Category::Healing => "Healing & Recovery",
            Category::Growth => "Growth",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motivational" => Ok(Category::Motivational),
            "alignment" => Ok(Category::Alignment),
            "healing" => Ok(Category::Healing),
            "growth" => Ok(Category::Growth),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: motivational, alignment, healing, growth",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub moods: Vec<MoodLevel>,
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn suits_any(&self, moods: &[MoodLevel]) -> bool {
        self.moods.iter().any(|m| moods.contains(m))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "item", default)]
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range ratings.
    ///
    /// A non-empty catalog must suit every mood, so any mood pattern has at
    /// least one direct match.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(SolaceError::Catalog(format!(
                    "Duplicate catalog id: '{}'",
                    item.id
                )));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(SolaceError::Catalog(format!(
                    "Rating for '{}' must be between 0 and 5, got {}",
                    item.id, item.rating
                )));
            }
        }

        if !items.is_empty() {
            let uncovered: Vec<&str> = MoodLevel::ALL
                .iter()
                .filter(|mood| !items.iter().any(|item| item.moods.contains(*mood)))
                .map(|mood| mood.name())
                .collect();
            if !uncovered.is_empty() {
                return Err(SolaceError::Catalog(format!(
                    "No catalog item suits these moods: {}",
                    uncovered.join(", ")
                )));
            }
        }

        Ok(Catalog { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The built-in book list
    pub fn builtin() -> Self {
        let items = BUILTIN_BOOKS
            .iter()
            .map(|b| CatalogItem {
                id: b.id.to_string(),
                title: b.title.to_string(),
                creator: b.author.to_string(),
                description: b.description.to_string(),
                category: b.category,
                moods: b.moods.to_vec(),
                rating: b.rating,
                tags: b.tags.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Catalog { items }
    }

    /// Parse a catalog from TOML (`[[item]]` tables)
    pub fn from_toml(contents: &str) -> Result<Self> {
        let parsed: Catalog = toml::from_str(contents)
            .map_err(|e| SolaceError::Catalog(format!("Failed to parse catalog: {}", e)))?;
        Catalog::new(parsed.items)
    }
}

/// Load `.solace/catalog.toml` if present, otherwise the built-in catalog.
pub fn load_catalog(repo_root: &Path) -> Result<Catalog> {
    let custom_path = repo_root.join(".solace").join("catalog.toml");

    if custom_path.exists() {
        let contents = fs::read_to_string(&custom_path)?;
        Catalog::from_toml(&contents)
    } else {
        Ok(Catalog::builtin())
    }
}

struct BuiltinBook {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    description: &'static str,
    category: Category,
    moods: &'static [MoodLevel],
    rating: f32,
    tags: &'static [&'static str],
}

const BUILTIN_BOOKS: &[BuiltinBook] = &[
    BuiltinBook {
        id: "1",
        title: "The Power of Now",
        author: "Eckhart Tolle",
        description: "A guide to spiritual enlightenment that teaches the importance of living in the present moment.",
        category: Category::Alignment,
        moods: &[Amazing, Good],
        rating: 4.8,
        tags: &["mindfulness", "spirituality", "presence"],
    },
    BuiltinBook {
        id: "2",
        title: "Atomic Habits",
        author: "James Clear",
        description: "A comprehensive guide to building good habits and breaking bad ones through small changes.",
        category: Category::Motivational,
        moods: &[Amazing, Good, Okay],
        rating: 4.9,
        tags: &["productivity", "self-improvement", "habits"],
    },
    BuiltinBook {
        id: "3",
        title: "Big Magic",
        author: "Elizabeth Gilbert",
        description: "Creative living beyond fear - a beautiful exploration of creativity and inspiration.",
        category: Category::Motivational,
        moods: &[Good, Amazing],
        rating: 4.6,
        tags: &["creativity", "inspiration", "courage"],
    },
    BuiltinBook {
        id: "4",
        title: "The Gifts of Imperfection",
        author: "Brené Brown",
        description: "Let go of who you think you're supposed to be and embrace who you are.",
        category: Category::Alignment,
        moods: &[Good, Okay],
        rating: 4.7,
        tags: &["self-acceptance", "vulnerability", "authenticity"],
    },
    BuiltinBook {
        id: "5",
        title: "Maybe You Should Talk to Someone",
        author: "Lori Gottlieb",
        description: "A therapist, her therapist, and our lives revealed through intimate stories of healing.",
        category: Category::Alignment,
        moods: &[Okay, Down],
        rating: 4.7,
        tags: &["therapy", "mental health", "healing"],
    },
    BuiltinBook {
        id: "6",
        title: "The Subtle Art of Not Giving a F*ck",
        author: "Mark Manson",
        description: "A counterintuitive approach to living a good life by focusing on what truly matters.",
        category: Category::Motivational,
        moods: &[Okay, Down],
        rating: 4.5,
        tags: &["philosophy", "priorities", "mindset"],
    },
    BuiltinBook {
        id: "7",
        title: "When Things Fall Apart",
        author: "Pema Chödrön",
        description: "Heart advice for difficult times from a beloved Buddhist teacher.",
        category: Category::Healing,
        moods: &[Down, Tough],
        rating: 4.6,
        tags: &["resilience", "Buddhism", "comfort"],
    },
    BuiltinBook {
        id: "8",
        title: "Option B",
        author: "Sheryl Sandberg & Adam Grant",
        description: "Facing adversity, building resilience, and finding joy after hardship.",
        category: Category::Healing,
        moods: &[Down, Tough],
        rating: 4.5,
        tags: &["resilience", "grief", "recovery"],
    },
    BuiltinBook {
        id: "9",
        title: "The Body Keeps the Score",
        author: "Bessel van der Kolk",
        description: "Brain, mind, and body in the healing of trauma.",
        category: Category::Healing,
        moods: &[Tough, Down],
        rating: 4.8,
        tags: &["trauma", "healing", "recovery"],
    },
    BuiltinBook {
        id: "10",
        title: "Rising Strong",
        author: "Brené Brown",
        description: "How the ability to reset transforms the way we live, love, parent, and lead.",
        category: Category::Healing,
        moods: &[Tough, Down, Okay],
        rating: 4.6,
        tags: &["resilience", "courage", "recovery"],
    },
];
