use crate::form::validation::ValidationErrorKind;
use regex::Regex;
use std::sync::LazyLock;

pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationErrorKind> + Send + Sync>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("Invalid email pattern")
});

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationErrorKind> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err(ValidationErrorKind::MissingRequired)
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() < min {
            Err(ValidationErrorKind::TooShort { min })
        } else {
            Ok(())
        }
    })
}

pub fn email() -> Validator {
    Box::new(|value: &str| {
        if is_email(value) {
            Ok(())
        } else {
            Err(ValidationErrorKind::InvalidFormat)
        }
    })
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
