use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no valid items ({rejected} entries rejected)")]
    EmptyCatalog { rejected: usize },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
