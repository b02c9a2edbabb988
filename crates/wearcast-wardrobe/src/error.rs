//! Wardrobe-specific error types.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WardrobeError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Invalid temperature range: min {min} is above max {max}")]
    InvalidTemperatureRange { min: f64, max: f64 },

    #[error("Temperature must be a finite number")]
    NonFiniteTemperature,

    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Item already exists: {0}")]
    DuplicateId(Uuid),
}

impl WardrobeError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Give the item a name.",
            Self::InvalidTemperatureRange { .. } => {
                "The minimum temperature must not be above the maximum."
            }
            Self::NonFiniteTemperature => "Enter a valid temperature.",
            Self::ItemNotFound(_) => "That item is no longer in your wardrobe.",
            Self::DuplicateId(_) => "That item is already in your wardrobe.",
        }
    }

    /// Whether the error comes from bad item input rather than store state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::InvalidTemperatureRange { .. } | Self::NonFiniteTemperature
        )
    }
}
