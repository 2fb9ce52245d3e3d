use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse airport catalog: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Airport catalog has no default entry")]
    MissingDefault,
    #[error("Airport key {0:?} is not a trimmed uppercase identifier")]
    UnnormalizedKey(String),
}
