//! Shared building blocks for form validators.

/// A single validation failure attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub const INVALID_CHARACTERS: &str = "Contains invalid characters.";

/// PostgreSQL text columns cannot store NUL.
pub fn has_invalid_characters(value: &str) -> bool {
    value.contains('\0')
}

/// Trims `value` and checks it is present, storable and at most `max`
/// characters long.
///
/// Pushes a [`FieldError`] on failure and returns the trimmed value either way,
/// so callers can keep collecting errors for the remaining fields.
pub fn required_text<'a>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &'a str,
    max: usize,
) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "This field is required."));
    } else if has_invalid_characters(trimmed) {
        errors.push(FieldError::new(field, INVALID_CHARACTERS));
    } else if trimmed.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("Must be at most {max} characters."),
        ));
    }
    trimmed
}

/// Messages recorded for `field`, in the order they were produced.
pub fn messages_for<'a>(errors: &'a [FieldError], field: &str) -> Vec<&'a str> {
    errors
        .iter()
        .filter(|e| e.field == field)
        .map(|e| e.message.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_value_is_required() {
        let mut errors = Vec::new();
        let out = required_text(&mut errors, "title", "   ", 10);
        assert_eq!(out, "");
        assert_eq!(errors, vec![FieldError::new("title", "This field is required.")]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        required_text(&mut errors, "title", "ééééé", 5);
        assert!(errors.is_empty());
        required_text(&mut errors, "title", "éééééé", 5);
        assert_eq!(errors[0].message, "Must be at most 5 characters.");
    }

    #[test]
    fn nul_is_rejected() {
        let mut errors = Vec::new();
        required_text(&mut errors, "title", "Bad\0Title", 100);
        assert_eq!(errors, vec![FieldError::new("title", INVALID_CHARACTERS)]);
    }

    #[test]
    fn messages_are_filtered_by_field() {
        let errors = vec![
            FieldError::new("a", "one"),
            FieldError::new("b", "two"),
            FieldError::new("a", "three"),
        ];
        assert_eq!(messages_for(&errors, "a"), vec!["one", "three"]);
        assert!(messages_for(&errors, "c").is_empty());
    }
}
