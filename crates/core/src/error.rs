// Error types for catalog queries

use thiserror::Error;

use crate::category::Category;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while querying a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record in the category matches the requested id
    #[error("{}", .0.not_found_message())]
    NotFound(Category),

    /// Backing store failure
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_category_message() {
        let err = CatalogError::NotFound(Category::Sports);
        assert_eq!(err.to_string(), "Sports event not found");
    }

    #[test]
    fn test_internal_wraps_anyhow() {
        let err: CatalogError = anyhow::anyhow!("disk on fire").into();
        assert!(matches!(err, CatalogError::Internal(_)));
        assert!(err.to_string().contains("disk on fire"));
    }
}
