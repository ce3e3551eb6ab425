//! Static schema for the seven soil and climate measurement fields

/// Static rule set for one input field
#[derive(Debug)]
pub struct FieldSpec {
    /// Wire name, also the JSON key sent to the prediction service
    pub name: &'static str,
    /// Display label
    pub label: &'static str,
    /// Typical value range shown as a hint
    pub placeholder: &'static str,
    /// Message shown when the predicate fails
    pub error_message: &'static str,
    /// Range constraint, applied after numeric parsing
    check: fn(f64) -> bool,
}

impl FieldSpec {
    /// Check a raw string value against this field's predicate.
    ///
    /// The value must parse as a finite number before the range
    /// constraint is applied; an empty string fails the parse.
    pub fn is_valid(&self, raw: &str) -> bool {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => (self.check)(v),
            _ => false,
        }
    }
}

fn non_negative(v: f64) -> bool {
    v >= 0.0
}

fn temperature_range(v: f64) -> bool {
    (-50.0..=60.0).contains(&v)
}

fn humidity_range(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}

fn ph_range(v: f64) -> bool {
    (0.0..=14.0).contains(&v)
}

/// The seven measurement fields, in form order. Fixed at process start.
pub const FIELD_SPECS: [FieldSpec; 7] = [
    FieldSpec {
        name: "nitrogen",
        label: "Nitrogen (N)",
        placeholder: "0-140",
        error_message: "Must be a positive number",
        check: non_negative,
    },
    FieldSpec {
        name: "phosphorus",
        label: "Phosphorus (P)",
        placeholder: "5-145",
        error_message: "Must be a positive number",
        check: non_negative,
    },
    FieldSpec {
        name: "potassium",
        label: "Potassium (K)",
        placeholder: "5-205",
        error_message: "Must be a positive number",
        check: non_negative,
    },
    FieldSpec {
        name: "temperature",
        label: "Temperature (°C)",
        placeholder: "8.8-43.7",
        error_message: "Must be a number between -50 and 60",
        check: temperature_range,
    },
    FieldSpec {
        name: "humidity",
        label: "Humidity (%)",
        placeholder: "14.6-99.9",
        error_message: "Must be a number between 0 and 100",
        check: humidity_range,
    },
    FieldSpec {
        name: "ph",
        label: "pH",
        placeholder: "3.5-9.9",
        error_message: "Must be a number between 0 and 14",
        check: ph_range,
    },
    FieldSpec {
        name: "rainfall",
        label: "Rainfall (mm)",
        placeholder: "20.2-298.6",
        error_message: "Must be a positive number",
        check: non_negative,
    },
];

/// Look up a field spec by wire name
#[allow(dead_code)]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.name == name)
}
