//! Product record as returned by the product service.

use serde::{Deserialize, Serialize};

/// A product in a result set.
///
/// The search core never interprets these fields; they exist for the
/// display surface. The record is whatever the product service returned,
/// taken as an indivisible unit for selection and ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Service-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Manufacturer model string, if the service knows one.
    #[serde(default)]
    pub model: String,
    /// Brand name, if the service knows one.
    #[serde(default)]
    pub brand: String,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Listed price.
    pub price: f64,
    /// Image URL for the product card.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Short label for list-style display surfaces.
    pub fn display_label(&self) -> String {
        if self.brand.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.brand)
        }
    }
}
