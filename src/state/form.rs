//! Form state for the measurement input screen

use crate::state::schema::{FieldSpec, FIELD_SPECS};
use crate::state::validate::ValidationResult;
use serde::Serialize;

/// Raw string values for the seven measurement fields.
///
/// This is also the request body: serialization yields a JSON object whose
/// keys are exactly the seven field names and whose values are the strings
/// as the user typed them (never converted to numeric JSON types).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
}

impl FormValues {
    /// Get a field's raw value by wire name
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "nitrogen" => Some(&self.nitrogen),
            "phosphorus" => Some(&self.phosphorus),
            "potassium" => Some(&self.potassium),
            "temperature" => Some(&self.temperature),
            "humidity" => Some(&self.humidity),
            "ph" => Some(&self.ph),
            "rainfall" => Some(&self.rainfall),
            _ => None,
        }
    }
}

/// One editable input field: the static spec plus the user's buffer
/// and the currently displayed validation error, if any
#[derive(Debug)]
pub struct InputField {
    pub spec: &'static FieldSpec,
    pub value: String,
    pub error: Option<&'static str>,
}

impl InputField {
    fn new(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    /// Push a character to the field buffer; editing clears the
    /// field's displayed error
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    /// Remove the last character from the field buffer
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.error = None;
    }

    /// Clear the field buffer
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

/// Index of the submit-button row, one past the last field
pub const BUTTON_ROW: usize = FIELD_SPECS.len();

/// The measurement form: seven fields plus a submit-button row
#[derive(Debug)]
pub struct CropForm {
    pub fields: [InputField; 7],
    pub active_index: usize,
}

impl CropForm {
    pub fn new() -> Self {
        Self {
            fields: [
                InputField::new(&FIELD_SPECS[0]),
                InputField::new(&FIELD_SPECS[1]),
                InputField::new(&FIELD_SPECS[2]),
                InputField::new(&FIELD_SPECS[3]),
                InputField::new(&FIELD_SPECS[4]),
                InputField::new(&FIELD_SPECS[5]),
                InputField::new(&FIELD_SPECS[6]),
            ],
            active_index: 0,
        }
    }

    /// Number of focusable rows (fields + button row)
    pub fn row_count(&self) -> usize {
        BUTTON_ROW + 1
    }

    /// True when focus is on the submit button
    pub fn is_button_row_active(&self) -> bool {
        self.active_index == BUTTON_ROW
    }

    /// Move focus to the next row (wraps around)
    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % self.row_count();
    }

    /// Move focus to the previous row (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.row_count() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// The field under the cursor, None on the button row
    pub fn active_field_mut(&mut self) -> Option<&mut InputField> {
        self.fields.get_mut(self.active_index)
    }

    /// Snapshot the field buffers as submittable values
    pub fn values(&self) -> FormValues {
        FormValues {
            nitrogen: self.fields[0].value.clone(),
            phosphorus: self.fields[1].value.clone(),
            potassium: self.fields[2].value.clone(),
            temperature: self.fields[3].value.clone(),
            humidity: self.fields[4].value.clone(),
            ph: self.fields[5].value.clone(),
            rainfall: self.fields[6].value.clone(),
        }
    }

    /// Annotate fields with the errors from a validation pass
    pub fn apply_errors(&mut self, result: &ValidationResult) {
        for field in &mut self.fields {
            field.error = result.error_for(field.spec.name);
        }
    }

    /// Clear all displayed field errors
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }
}

impl Default for CropForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::validate::validate;

    fn filled_form() -> CropForm {
        let mut form = CropForm::new();
        let values = ["90", "42", "43", "20.8", "82", "6.5", "202.9"];
        for (field, value) in form.fields.iter_mut().zip(values) {
            field.value = value.to_string();
        }
        form
    }

    mod form_values {
        use super::*;

        #[test]
        fn test_get_returns_raw_strings() {
            let values = filled_form().values();
            assert_eq!(values.get("nitrogen"), Some("90"));
            assert_eq!(values.get("ph"), Some("6.5"));
            assert_eq!(values.get("rainfall"), Some("202.9"));
        }

        #[test]
        fn test_get_unknown_field_is_none() {
            let values = FormValues::default();
            assert!(values.get("label").is_none());
        }

        #[test]
        fn test_serializes_to_exactly_seven_string_keys() {
            let json = serde_json::to_value(filled_form().values()).unwrap();
            let object = json.as_object().unwrap();
            assert_eq!(object.len(), 7);
            for name in [
                "nitrogen",
                "phosphorus",
                "potassium",
                "temperature",
                "humidity",
                "ph",
                "rainfall",
            ] {
                assert!(object[name].is_string(), "{name} not a string");
            }
            assert_eq!(object["temperature"], "20.8");
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_first_field() {
            let form = CropForm::new();
            assert_eq!(form.active_index, 0);
            assert!(!form.is_button_row_active());
        }

        #[test]
        fn test_next_field_reaches_button_row_then_wraps() {
            let mut form = CropForm::new();
            for _ in 0..7 {
                form.next_field();
            }
            assert!(form.is_button_row_active());
            form.next_field();
            assert_eq!(form.active_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_button_row() {
            let mut form = CropForm::new();
            form.prev_field();
            assert!(form.is_button_row_active());
        }

        #[test]
        fn test_active_field_mut_is_none_on_button_row() {
            let mut form = CropForm::new();
            form.active_index = BUTTON_ROW;
            assert!(form.active_field_mut().is_none());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_push_and_pop_char() {
            let mut form = CropForm::new();
            let field = form.active_field_mut().unwrap();
            field.push_char('4');
            field.push_char('2');
            assert_eq!(field.value, "42");
            field.pop_char();
            assert_eq!(field.value, "4");
        }

        #[test]
        fn test_clear_empties_the_buffer() {
            let mut form = filled_form();
            form.fields[0].clear();
            assert_eq!(form.fields[0].value, "");
        }

        #[test]
        fn test_editing_clears_displayed_error() {
            let mut form = CropForm::new();
            form.fields[0].value = "-5".to_string();
            let result = validate(&form.values());
            form.apply_errors(&result);
            assert!(form.fields[0].error.is_some());

            form.fields[0].push_char('0');
            assert!(form.fields[0].error.is_none());
        }

        #[test]
        fn test_apply_errors_annotates_only_failing_fields() {
            let mut form = filled_form();
            form.fields[5].value = "15".to_string(); // ph out of range
            let result = validate(&form.values());
            form.apply_errors(&result);

            assert!(form.fields[5].error.is_some());
            for (i, field) in form.fields.iter().enumerate() {
                if i != 5 {
                    assert!(field.error.is_none(), "{}", field.spec.name);
                }
            }
        }

        #[test]
        fn test_clear_errors() {
            let mut form = CropForm::new();
            let result = validate(&form.values());
            form.apply_errors(&result);
            assert!(form.fields.iter().all(|f| f.error.is_some()));

            form.clear_errors();
            assert!(form.fields.iter().all(|f| f.error.is_none()));
        }
    }
}
