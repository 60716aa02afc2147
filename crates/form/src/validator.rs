//! Completeness check for a [`Form`].
//!
//! Every field in [`FieldId::ALL`](crate::FieldId::ALL) must be non-blank.
//! There is no format check on any field.

use crate::{FieldId, Form};
use geoform_core::validation::{ValidationResult, Validator};

/// Per-field report of blank values.
pub fn validate(form: &Form) -> ValidationResult {
    form.fields()
        .fold(Validator::new(), |v, (id, value)| v.required(id.name(), value))
        .validate()
}

/// True when every field is non-empty after trimming.
pub fn is_complete(form: &Form) -> bool {
    validate(form).is_valid()
}

/// Fields that fail [`validate`], in declaration order.
pub fn blank_fields(form: &Form) -> Vec<FieldId> {
    let report = validate(form);
    let failed = report.failed_fields();
    FieldId::ALL
        .into_iter()
        .filter(|id| failed.contains(&id.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete() -> Form {
        Form {
            first: "Jane".into(),
            last: "Doe".into(),
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62704".into(),
        }
    }

    #[test]
    fn test_complete_form() {
        assert!(is_complete(&complete()));
        assert!(blank_fields(&complete()).is_empty());
    }

    #[test]
    fn test_empty_zip() {
        let form = Form { zip: String::new(), ..complete() };
        assert!(!is_complete(&form));
        assert_eq!(blank_fields(&form), vec![FieldId::Zip]);
    }

    #[test]
    fn test_whitespace_zip() {
        let form = Form { zip: "   ".into(), ..complete() };
        assert!(!is_complete(&form));
    }

    #[test]
    fn test_report_names_every_blank_field() {
        let form = Form { first: String::new(), city: "\t".into(), ..complete() };
        assert_eq!(validate(&form).failed_fields(), vec!["first", "city"]);
    }

    #[test]
    fn test_blank_fields_agree_with_report() {
        let form = Form { last: "\n".into(), state: " ".into(), ..complete() };
        let names: Vec<&str> = blank_fields(&form).iter().map(|f| f.name()).collect();
        assert_eq!(names, validate(&form).failed_fields());
        assert_eq!(names, vec!["last", "state"]);
    }

    #[test]
    fn test_default_form_fails_every_field() {
        assert_eq!(blank_fields(&Form::default()), FieldId::ALL.to_vec());
    }

    proptest! {
        #[test]
        fn each_field_is_checked(index in 0usize..6, blank in "[ \t]{0,3}") {
            let mut form = complete();
            let target = FieldId::ALL[index];
            match target {
                FieldId::First => form.first = blank,
                FieldId::Last => form.last = blank,
                FieldId::Street => form.street = blank,
                FieldId::City => form.city = blank,
                FieldId::State => form.state = blank,
                FieldId::Zip => form.zip = blank,
            }
            prop_assert!(!is_complete(&form));
            prop_assert_eq!(blank_fields(&form), vec![target]);
        }
    }
}
