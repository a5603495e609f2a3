use crate::units::catalog::category;
use crate::units::converter::{convert, quick_reference};
use crate::units::types::{Category, ReferenceRow};
use serde::{Deserialize, Serialize};

/// State behind the converter form.
/// `result` is recomputed on every transition so it always matches the other fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterState {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub input: String,
    pub result: String,
}

/// User interactions the form can send
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConverterAction {
    SetCategory { category: Category },
    SetInput { value: String },
    SetFromUnit { unit: String },
    SetToUnit { unit: String },
    Swap,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterState {
    /// Meters to feet with an input of 1
    pub fn new() -> Self {
        let mut state = Self {
            category: Category::Length,
            from_unit: "meters".to_string(),
            to_unit: "feet".to_string(),
            input: "1".to_string(),
            result: String::new(),
        };
        state.recompute();
        state
    }

    /// Start on the default pairing of a category
    pub fn for_category(category_key: Category) -> Self {
        let mut state = Self::new();
        state.set_category(category_key);
        state
    }

    /// Switch category, resetting units to the category defaults and the input to 1
    pub fn set_category(&mut self, category_key: Category) {
        let (from, to) = category(category_key).default_pair();
        self.category = category_key;
        self.from_unit = from.to_string();
        self.to_unit = to.to_string();
        self.input = "1".to_string();
        self.recompute();
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.recompute();
    }

    pub fn set_from_unit(&mut self, unit: &str) {
        self.from_unit = unit.to_string();
        self.recompute();
    }

    pub fn set_to_unit(&mut self, unit: &str) {
        self.to_unit = unit.to_string();
        self.recompute();
    }

    /// Exchange units and convert the current input with the reversed pair.
    /// This is not an inversion of the previous result.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        self.recompute();
    }

    pub fn apply(&mut self, action: ConverterAction) {
        match action {
            ConverterAction::SetCategory { category } => self.set_category(category),
            ConverterAction::SetInput { value } => self.set_input(&value),
            ConverterAction::SetFromUnit { unit } => self.set_from_unit(&unit),
            ConverterAction::SetToUnit { unit } => self.set_to_unit(&unit),
            ConverterAction::Swap => self.swap(),
        }
    }

    pub fn quick_reference(&self) -> Vec<ReferenceRow> {
        quick_reference(self.category)
    }

    fn recompute(&mut self) {
        self.result = convert(&self.input, &self.from_unit, &self.to_unit, self.category);
    }
}
