//! Clinical feature table.
//!
//! One spec per input field of the prediction form: identity, display label,
//! unit, hard range, slider step and default. The table is the single source
//! of truth for the form controls, validation and the sample/reset actions.

/// Specification of one clinical input field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name, as the backend expects it in the feature mapping.
    pub name: &'static str,
    pub label: &'static str,
    /// Unit suffix for the human-readable value label, if any.
    pub unit: Option<&'static str>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Required fields must be present and non-blank at submission.
    pub required: bool,
}

/// All form fields, in canonical (wire) order.
pub const FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        name: "Pregnancies",
        label: "Pregnancies",
        unit: None,
        min: 0.0,
        max: 20.0,
        step: 1.0,
        default: 1.0,
        required: false,
    },
    FieldSpec {
        name: "Glucose",
        label: "Glucose",
        unit: Some("mg/dL"),
        min: 0.0,
        max: 300.0,
        step: 1.0,
        default: 100.0,
        required: true,
    },
    FieldSpec {
        name: "BloodPressure",
        label: "Blood Pressure",
        unit: Some("mm Hg"),
        min: 0.0,
        max: 200.0,
        step: 1.0,
        default: 70.0,
        required: false,
    },
    FieldSpec {
        name: "SkinThickness",
        label: "Skin Thickness",
        unit: Some("mm"),
        min: 0.0,
        max: 100.0,
        step: 1.0,
        default: 20.0,
        required: false,
    },
    FieldSpec {
        name: "Insulin",
        label: "Insulin",
        unit: Some("mu U/ml"),
        min: 0.0,
        max: 900.0,
        step: 1.0,
        default: 80.0,
        required: false,
    },
    FieldSpec {
        name: "BMI",
        label: "BMI",
        unit: None,
        min: 10.0,
        max: 70.0,
        step: 0.1,
        default: 25.0,
        required: true,
    },
    FieldSpec {
        name: "DiabetesPedigreeFunction",
        label: "Diabetes Pedigree",
        unit: None,
        min: 0.0,
        max: 2.5,
        step: 0.001,
        default: 0.5,
        required: false,
    },
    FieldSpec {
        name: "Age",
        label: "Age",
        unit: Some("years"),
        min: 1.0,
        max: 120.0,
        step: 1.0,
        default: 30.0,
        required: true,
    },
];

/// Look up a field spec by wire name.
pub fn spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else {
        3
    }
}

impl FieldSpec {
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// Format a value at the field's step precision.
    pub fn format_value(&self, v: f64) -> String {
        match decimals_for_step(self.step) {
            0 => format!("{v:.0}"),
            1 => format!("{v:.1}"),
            2 => format!("{v:.2}"),
            _ => format!("{v:.3}"),
        }
    }

    /// Human-readable value label with the unit suffix, e.g. `"85 mg/dL"`.
    pub fn display_with_unit(&self, v: f64) -> String {
        match self.unit {
            Some(u) => format!("{} {}", self.format_value(v), u),
            None => self.format_value(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_inventory_is_stable() {
        assert_eq!(FIELDS.len(), 8);

        let mut names: Vec<&'static str> = FIELDS.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);

        let required: Vec<&'static str> = FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, ["Glucose", "BMI", "Age"]);

        for f in &FIELDS {
            assert!(f.min < f.max, "{} range inverted", f.name);
            assert!(f.default >= f.min && f.default <= f.max, "{} default", f.name);
        }
    }

    #[test]
    fn spec_lookup() {
        assert_eq!(spec("Glucose").unwrap().unit, Some("mg/dL"));
        assert_eq!(spec("BMI").unwrap().min, 10.0);
        assert!(spec("HbA1c").is_none());
    }

    // Setting the numeric input then reading the slider (or vice versa) goes
    // through clamp + format; a second pass must not change the value.
    #[test]
    fn clamp_format_roundtrip_is_idempotent() {
        for f in &FIELDS {
            for raw in [f.min, f.max, f.default, (f.min + f.max) / 2.0, f.min - 5.0, f.max + 5.0] {
                let once = f.format_value(f.clamp(raw));
                let parsed: f64 = once.parse().unwrap();
                let twice = f.format_value(f.clamp(parsed));
                assert_eq!(once, twice, "{} value {}", f.name, raw);
            }
        }
    }

    #[test]
    fn unit_suffix_display() {
        let glucose = spec("Glucose").unwrap();
        assert_eq!(glucose.display_with_unit(85.0), "85 mg/dL");

        let bmi = spec("BMI").unwrap();
        assert_eq!(bmi.display_with_unit(26.6), "26.6");

        let age = spec("Age").unwrap();
        assert_eq!(age.display_with_unit(31.0), "31 years");

        let dpf = spec("DiabetesPedigreeFunction").unwrap();
        assert_eq!(dpf.display_with_unit(0.351), "0.351");
    }
}
