use crate::config::ContentConfig;
use crate::error::ContentError;
use serde::Deserialize;
use std::fs;

/// A topic label with the pool of secret words it can produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

// Root structure matching the JSON override schema
#[derive(Debug, Deserialize)]
struct JsonCatalog {
    categories: Vec<Category>,
}

/// Immutable category → word-list table the round engine draws from.
///
/// Validated at construction: at least one category, every category named,
/// every word list nonempty. The engine relies on this and indexes without
/// further checks.
#[derive(Debug)]
pub struct WordCatalog {
    categories: Vec<Category>,
}

const BUILTIN_CATALOG: &[(&str, &[&str])] = &[
    (
        "Animals",
        &[
            "Lion", "Elephant", "Penguin", "Dolphin", "Eagle", "Tiger", "Giraffe", "Zebra",
            "Kangaroo", "Panda",
        ],
    ),
    (
        "Fruits",
        &[
            "Apple",
            "Banana",
            "Orange",
            "Strawberry",
            "Grape",
            "Watermelon",
            "Pineapple",
            "Mango",
            "Kiwi",
            "Blueberry",
        ],
    ),
    (
        "Countries",
        &[
            "France",
            "Japan",
            "Brazil",
            "Australia",
            "Mexico",
            "Canada",
            "India",
            "Egypt",
            "Italy",
            "Germany",
        ],
    ),
    (
        "Food",
        &[
            "Pizza", "Burger", "Sushi", "Taco", "Pasta", "Salad", "Sandwich", "Steak", "Soup",
            "Donut",
        ],
    ),
    (
        "Sports",
        &[
            "Football",
            "Basketball",
            "Tennis",
            "Baseball",
            "Hockey",
            "Volleyball",
            "Swimming",
            "Golf",
            "Boxing",
            "Cricket",
        ],
    ),
];

impl WordCatalog {
    /// The default table compiled into the binary.
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATALOG
            .iter()
            .map(|(name, words)| Category {
                name: (*name).to_string(),
                words: words.iter().map(|w| (*w).to_string()).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Parse and validate a catalog from its JSON representation.
    #[tracing::instrument(skip(content), fields(content.length = content.len()))]
    pub fn from_json(content: &str) -> Result<Self, ContentError> {
        let parsed: JsonCatalog =
            serde_json::from_str(content).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::validate(parsed.categories)
    }

    fn validate(categories: Vec<Category>) -> Result<Self, ContentError> {
        if categories.is_empty() {
            return Err(ContentError::NoCategories);
        }

        let mut cleaned = Vec::with_capacity(categories.len());
        for category in categories {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(ContentError::UnnamedCategory);
            }
            let words: Vec<String> = category
                .words
                .into_iter()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect();
            if words.is_empty() {
                return Err(ContentError::EmptyCategory(name));
            }
            cleaned.push(Category { name, words });
        }

        Ok(Self {
            categories: cleaned,
        })
    }

    /// Load the catalog selected by configuration: a JSON file when
    /// `file_path` is set, the builtin table otherwise.
    pub fn load(config: &ContentConfig) -> Result<Self, ContentError> {
        match &config.file_path {
            Some(path) => {
                tracing::debug!(file.path = %path, "Loading word catalog from file");
                let raw = fs::read_to_string(path).map_err(|e| ContentError::FileRead {
                    path: path.clone(),
                    source: e,
                })?;
                let catalog = Self::from_json(&raw)?;
                tracing::info!(
                    categories.count = catalog.categories.len(),
                    "Loaded word catalog"
                );
                Ok(catalog)
            }
            None => {
                tracing::debug!("Using builtin word catalog");
                Ok(Self::builtin())
            }
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
