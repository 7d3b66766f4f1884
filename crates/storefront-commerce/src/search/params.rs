//! Filter parameters for product queries.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Fields the product service accepts in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// Manufacturer model string.
    Model,
    /// Category label.
    Category,
    /// Brand name.
    Brand,
    /// Lower price bound, inclusive.
    PriceMin,
    /// Upper price bound, inclusive.
    PriceMax,
}

impl FilterField {
    /// All recognized fields, in wire order.
    pub const ALL: [FilterField; 5] = [
        FilterField::Model,
        FilterField::Category,
        FilterField::Brand,
        FilterField::PriceMin,
        FilterField::PriceMax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Model => "model",
            FilterField::Category => "category",
            FilterField::Brand => "brand",
            FilterField::PriceMin => "price_min",
            FilterField::PriceMax => "price_max",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "model" => Some(FilterField::Model),
            "category" => Some(FilterField::Category),
            "brand" => Some(FilterField::Brand),
            "price_min" => Some(FilterField::PriceMin),
            "price_max" => Some(FilterField::PriceMax),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sparse query mapping sent to the product service.
///
/// Invariant: a value that is absent, or blank after trimming, is never in
/// the mapping. An empty mapping means browse mode — no criteria active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    fields: BTreeMap<FilterField, String>,
}

impl FilterParams {
    /// Create an empty parameter set (browse mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from the search box.
    ///
    /// A non-blank text searches by model; blank text falls back to browse
    /// mode.
    pub fn from_search_text(text: &str) -> Self {
        let mut params = Self::new();
        params.set(FilterField::Model, text);
        params
    }

    /// Build parameters from the filter form.
    ///
    /// Recognized fields with non-blank values are included; everything
    /// else is dropped. Values are passed through as opaque strings — the
    /// service rejects malformed ones.
    pub fn from_form_fields(fields: &HashMap<String, String>) -> Self {
        let mut params = Self::new();
        for (key, value) in fields {
            if let Some(field) = FilterField::from_str(key) {
                params.set(field, value);
            }
        }
        params
    }

    /// Set a field, trimming the value. Blank values clear the field.
    pub fn set(&mut self, field: FilterField, value: impl AsRef<str>) {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, trimmed.to_string());
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: FilterField, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Get a field value.
    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.fields.get(&field).map(|s| s.as_str())
    }

    /// True when no criteria are active and a query means "browse".
    pub fn is_browse(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of active fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(field, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }
}
