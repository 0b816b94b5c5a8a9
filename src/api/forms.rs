//! Form binding support - folds declarative validation output into
//! per-field messages the views can re-render.

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Per-field validation messages collected for one form submission.
///
/// Keys are form field names; insertion order within a field is kept so
/// the first message is the one shown next to the input.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a named field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// First message attached to a field, if any
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All (field, message) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().flat_map(|(field, messages)| {
            messages
                .iter()
                .map(move |message| (field.as_str(), message.as_str()))
        })
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(validation: ValidationErrors) -> Self {
        let mut collected = FieldErrors::new();
        for (field, errors) in validation.field_errors() {
            for error in errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                collected.add(field.to_string(), message);
            }
        }
        collected
    }
}
