//! Form validation.
//!
//! Pure and total: given the raw field-name → string mapping exactly as typed,
//! returns either `Valid` or every violated rule in field order. Nothing here
//! touches the document, so the rules are plain unit tests.

use std::collections::HashMap;

use crate::fields::FIELDS;

/// Outcome of validating the full input set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// All violated rules, in declaration order of the fields.
    Invalid(Vec<String>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Single message joining every reason, for the notification widget.
    pub fn message(&self) -> Option<String> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(reasons) => Some(reasons.join(" ")),
        }
    }
}

/// Hard range checks reported as validation errors. Other fields are bounded
/// by their controls; the backend accepts whatever passes these.
const RANGE_RULES: [(&str, f64, f64); 3] = [
    ("Glucose", 0.0, 300.0),
    ("BMI", 10.0, 70.0),
    ("Age", 1.0, 120.0),
];

/// Validate the raw string values of the whole form. Does not short-circuit:
/// every violated rule contributes one reason.
pub fn validate(values: &HashMap<String, String>) -> Validation {
    let mut reasons = Vec::new();

    for field in &FIELDS {
        let raw = values.get(field.name).map(|s| s.trim()).unwrap_or("");

        if raw.is_empty() {
            if field.required {
                reasons.push(format!("{} is required.", field.label));
            }
            continue;
        }

        let parsed: f64 = match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                reasons.push(format!("{} must be a number.", field.label));
                continue;
            }
        };

        if let Some((_, min, max)) = RANGE_RULES.iter().find(|(name, _, _)| *name == field.name) {
            if parsed < *min || parsed > *max {
                reasons.push(format!(
                    "{} must be between {} and {}.",
                    field.label, min, max
                ));
            }
        }
    }

    if reasons.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn all_valid_input_passes() {
        let values = input(&[
            ("Pregnancies", "1"),
            ("Glucose", "100"),
            ("BloodPressure", "66"),
            ("SkinThickness", "29"),
            ("Insulin", "94"),
            ("BMI", "22"),
            ("DiabetesPedigreeFunction", "0.351"),
            ("Age", "30"),
        ]);
        assert_eq!(validate(&values), Validation::Valid);
    }

    #[test]
    fn glucose_out_of_range_is_reported() {
        let values = input(&[("Glucose", "350"), ("BMI", "25"), ("Age", "40")]);
        match validate(&values) {
            Validation::Invalid(reasons) => {
                assert!(reasons.iter().any(|r| r.contains("Glucose")), "{reasons:?}");
                assert!(reasons.iter().all(|r| !r.contains("BMI")), "{reasons:?}");
            }
            Validation::Valid => panic!("expected invalid"),
        }
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let result = validate(&HashMap::new());
        match result {
            Validation::Invalid(reasons) => {
                assert_eq!(reasons.len(), 3);
                assert!(reasons[0].contains("Glucose"));
                assert!(reasons[1].contains("BMI"));
                assert!(reasons[2].contains("Age"));
            }
            Validation::Valid => panic!("expected invalid"),
        }
    }

    #[test]
    fn does_not_short_circuit() {
        let values = input(&[("Glucose", "abc"), ("BMI", "5"), ("Age", "200")]);
        match validate(&values) {
            Validation::Invalid(reasons) => {
                assert_eq!(reasons.len(), 3, "{reasons:?}");
            }
            Validation::Valid => panic!("expected invalid"),
        }
    }

    #[test]
    fn optional_blank_fields_are_allowed() {
        let values = input(&[
            ("Glucose", "100"),
            ("BMI", "22"),
            ("Age", "30"),
            ("Insulin", ""),
            ("Pregnancies", "  "),
        ]);
        assert_eq!(validate(&values), Validation::Valid);
    }

    #[test]
    fn non_numeric_optional_field_is_reported() {
        let values = input(&[("Glucose", "100"), ("BMI", "22"), ("Age", "30"), ("Insulin", "high")]);
        match validate(&values) {
            Validation::Invalid(reasons) => {
                assert_eq!(reasons, ["Insulin must be a number."]);
            }
            Validation::Valid => panic!("expected invalid"),
        }
    }

    #[test]
    fn is_deterministic() {
        let values = input(&[("Glucose", "500"), ("Age", "0")]);
        let a = validate(&values);
        let b = validate(&values);
        assert_eq!(a, b);
        assert!(!a.is_valid());
        assert!(a.message().unwrap().contains("BMI is required."));
    }
}
