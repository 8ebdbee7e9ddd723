use crate::form::field::Field;
use crate::widgets::validators::{self, Validator, run_validators};
use indexmap::IndexMap;
use thiserror::Error;

pub const FIRST_NAME_MIN_LEN: usize = 5;

/// The three ways a field can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("is a required field.")]
    MissingRequired,
    #[error("must have at least {min} characters.")]
    TooShort { min: usize },
    #[error("must be a valid email address.")]
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("error: {field} {kind}")]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Per-field errors, always iterated in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: IndexMap<Field, ValidationErrorKind>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry for `field` with the outcome of a validation pass.
    pub fn record(&mut self, field: Field, outcome: Result<(), ValidationErrorKind>) {
        match outcome {
            Ok(()) => {
                self.entries.shift_remove(&field);
            }
            Err(kind) => {
                self.entries.insert(field, kind);
                self.entries.sort_keys();
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.entries
            .get(&field)
            .map(|kind| FieldError::new(field, *kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.entries
            .iter()
            .map(|(field, kind)| FieldError::new(*field, *kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rule set applied to each field.
pub struct FieldRules {
    rules: Vec<(Field, Vec<Validator>)>,
}

impl FieldRules {
    pub fn contact_form() -> Self {
        Self {
            rules: vec![
                (
                    Field::FirstName,
                    vec![
                        validators::required(),
                        validators::min_length(FIRST_NAME_MIN_LEN),
                    ],
                ),
                (Field::LastName, vec![validators::required()]),
                (
                    Field::Email,
                    vec![validators::required(), validators::email()],
                ),
                (Field::Message, Vec::new()),
            ],
        }
    }

    /// Validate a single field value. Rules run in order, first failure wins.
    pub fn check(&self, field: Field, value: &str) -> Result<(), ValidationErrorKind> {
        self.rules
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map_or(Ok(()), |(_, validators)| run_validators(validators, value))
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::contact_form()
    }
}
