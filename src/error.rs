use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {0}")]
    Load(String),
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read catalog file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
    #[error("Catalog has no categories")]
    NoCategories,
    #[error("Catalog contains a category with an empty name")]
    UnnamedCategory,
    #[error("Category {0:?} has no words")]
    EmptyCategory(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
