use crate::form::field::Field;
use crate::form::state::{FormState, SubmittedRecord};
use crate::form::validation::{FieldError, FieldRules, ValidationErrors};
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { errors: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// The contact form: field values, inline errors and the last submitted
/// record.
///
/// Editing a field re-validates only that field. [`ContactForm::submit`]
/// re-validates everything and snapshots the values when nothing fails.
#[derive(Default)]
pub struct ContactForm {
    state: FormState,
    rules: FieldRules,
    errors: ValidationErrors,
    submitted: Option<SubmittedRecord>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled values. Nothing is validated until the first
    /// edit or submit.
    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.get(field)
    }

    /// Type `text` into `field` one character at a time, validating after
    /// each keystroke.
    pub fn type_text(&mut self, field: Field, text: &str) {
        for ch in text.chars() {
            self.state.get_mut(field).push(ch);
            self.revalidate(field);
        }
    }

    /// Replace the value of `field` and validate it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
        self.revalidate(field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        for field in Field::ALL {
            self.revalidate(field);
        }
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected {
                errors: self.errors.len(),
            };
        }
        self.submitted = Some(SubmittedRecord::snapshot(&self.state));
        SubmitOutcome::Accepted
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    pub fn view(&self) -> View {
        View::contact_form(&self.state, &self.errors, self.submitted.as_ref())
    }

    fn revalidate(&mut self, field: Field) {
        let outcome = self.rules.check(field, self.state.get(field));
        self.errors.record(field, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, SubmitOutcome};
    use crate::form::field::Field;
    use crate::form::state::FormState;
    use crate::form::validation::ValidationErrorKind;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.type_text(Field::FirstName, "Matthew");
        form.type_text(Field::LastName, "Phillips");
        form.type_text(Field::Email, "matt@matt.com");
        form
    }

    #[test]
    fn keystrokes_only_touch_the_edited_field() {
        let mut form = ContactForm::new();
        form.type_text(Field::Email, "asdf");
        form.type_text(Field::FirstName, "asd");
        assert_eq!(form.errors().len(), 2);

        form.type_text(Field::FirstName, "fgh");
        assert_eq!(form.error(Field::FirstName), None);
        assert_eq!(
            form.error(Field::Email).map(|err| err.kind),
            Some(ValidationErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn clearing_a_field_reports_missing() {
        let mut form = filled();
        form.set_value(Field::LastName, "");
        assert_eq!(
            form.error(Field::LastName).map(|err| err.kind),
            Some(ValidationErrorKind::MissingRequired)
        );
    }

    #[test]
    fn empty_submit_rejects_three_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Rejected { errors: 3 });
        assert!(form.submitted().is_none());
        assert!(form.error(Field::Message).is_none());
    }

    #[test]
    fn valid_submit_snapshots_values() {
        let mut form = filled();
        assert!(form.submit().is_accepted());

        let record = form.submitted().expect("record");
        assert_eq!(record.first_name, "Matthew");
        assert_eq!(record.message, None);

        form.type_text(Field::FirstName, "son");
        assert_eq!(form.submitted().map(|r| r.first_name.as_str()), Some("Matthew"));
    }

    #[test]
    fn failed_submit_keeps_previous_record() {
        let mut form = filled();
        assert!(form.submit().is_accepted());

        form.set_value(Field::Email, "nope");
        assert_eq!(form.submit(), SubmitOutcome::Rejected { errors: 1 });
        assert_eq!(
            form.submitted().map(|r| r.email.as_str()),
            Some("matt@matt.com")
        );
    }

    #[test]
    fn prefill_is_not_validated_until_submit() {
        let mut state = FormState::new();
        state.set(Field::Email, "bad");
        let mut form = ContactForm::with_state(state);
        assert!(form.errors().is_empty());

        assert_eq!(form.submit(), SubmitOutcome::Rejected { errors: 3 });
    }
}
