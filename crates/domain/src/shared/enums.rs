use thiserror::Error;

/// Returned when a persisted enum value does not match any known variant
#[derive(Error, Debug, PartialEq)]
#[error("Unknown {field} value: `{value}`")]
pub struct InvalidVariantError {
    pub field: &'static str,
    pub value: String,
}

impl InvalidVariantError {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}
