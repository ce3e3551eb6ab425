//! Input validation against the field schema

use crate::state::form::FormValues;
use crate::state::schema::FIELD_SPECS;
use std::collections::BTreeMap;

/// Outcome of checking all seven fields in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Field name → error message, absent for fields that passed
    pub field_errors: BTreeMap<&'static str, &'static str>,
}

impl ValidationResult {
    /// True iff no field failed
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// The error message for a field, if it failed
    pub fn error_for(&self, name: &str) -> Option<&'static str> {
        self.field_errors.get(name).copied()
    }
}

/// Check every field against its spec.
///
/// Pure function: all fields are evaluated independently so every
/// simultaneous error is reported in a single pass.
pub fn validate(values: &FormValues) -> ValidationResult {
    let mut field_errors = BTreeMap::new();
    for spec in &FIELD_SPECS {
        let raw = values.get(spec.name).unwrap_or_default();
        if !spec.is_valid(raw) {
            field_errors.insert(spec.name, spec.error_message);
        }
    }
    ValidationResult { field_errors }
}
