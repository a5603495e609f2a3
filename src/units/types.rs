use crate::units::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement domain a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Data,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Data,
    ];

    /// Stable key used by the UI and on the wire
    pub fn key(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Data => "data",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Data => "Data",
        }
    }

    /// Temperature is affine and never uses scale factors
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// One concrete unit within a category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDefinition {
    pub key: &'static str,
    pub label: &'static str,
    /// 1 of this unit = `to_base` of the category base unit; `None` for temperature
    pub to_base: Option<f64>,
}

/// A category and its units in declaration order
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnitCategory {
    pub key: Category,
    pub label: &'static str,
    pub units: &'static [UnitDefinition],
}

impl UnitCategory {
    pub fn unit(&self, key: &str) -> Option<&'static UnitDefinition> {
        self.units.iter().find(|u| u.key == key)
    }

    pub fn unit_keys(&self) -> impl Iterator<Item = &'static str> {
        let units: &'static [UnitDefinition] = self.units;
        units.iter().map(|u| u.key)
    }

    pub fn first_unit(&self) -> &'static UnitDefinition {
        // Every catalog entry declares at least one unit
        &self.units[0]
    }

    /// Default (source, target) pair used when switching to this category.
    /// Falls back to the first unit on both sides for single-unit categories.
    pub fn default_pair(&self) -> (&'static str, &'static str) {
        let first = self.first_unit().key;
        let second = self.units.get(1).map(|u| u.key).unwrap_or(first);
        (first, second)
    }
}

/// A single conversion as sent by the presentation layer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
}

/// One "1 <unit> = <value> <base label>" line of the quick reference
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRow {
    pub unit: String,
    pub label: String,
    pub value: String,
    pub base_label: String,
}

impl fmt::Display for ReferenceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.label, self.value, self.base_label)
    }
}
