//! Category - Named bucket for listings

use serde::{Deserialize, Serialize};

use super::required_text;
use crate::domain::errors::DomainError;

pub const CATEGORY_NAME_MAX_LEN: usize = 64;

/// Category - globally unique by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A category ready to be inserted
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn parse(name: Option<String>) -> Result<Self, DomainError> {
        let name = required_text("name", name, Some(CATEGORY_NAME_MAX_LEN))?;
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_name() {
        let category = NewCategory::parse(Some(" Books ".to_string())).unwrap();
        assert_eq!(category.name, "Books");
    }

    #[test]
    fn test_missing_name_is_validation_error() {
        let err = NewCategory::parse(None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
