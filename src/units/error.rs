use crate::units::types::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: Category, unit: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
