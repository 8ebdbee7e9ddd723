use crate::form::{ContactForm, Field, SubmitOutcome};
use crate::state::focus::{FocusState, FocusTarget, SUBMIT_ID};
use crate::terminal::KeyEvent;
use crate::view::SUBMIT_TEXT;
use crate::widgets::inputs::{ButtonInput, TextInput};
use crate::widgets::traits::{InteractionResult, Interactive, TextAction, WidgetAction};
use indexmap::IndexMap;

/// Interactive host around a [`ContactForm`]: one text widget per field, the
/// submit button and the focus ring.
///
/// Widgets own the cursor; the form owns the values. Every edit a widget
/// reports is pushed into the form, which re-validates that field.
pub struct AppState {
    form: ContactForm,
    inputs: IndexMap<Field, TextInput>,
    submit: ButtonInput,
    focus: FocusState,
    exit_requested: bool,
}

impl AppState {
    pub fn new(form: ContactForm) -> Self {
        let inputs = Field::ALL
            .into_iter()
            .map(|field| {
                let input = TextInput::new(field.name(), field.label())
                    .with_default(form.value(field));
                let input = if field.is_required() {
                    input
                } else {
                    input.with_placeholder("(optional)")
                };
                (field, input)
            })
            .collect();

        Self {
            form,
            inputs,
            submit: ButtonInput::new(SUBMIT_ID, SUBMIT_TEXT),
            focus: FocusState::default(),
            exit_requested: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn into_form(self) -> ContactForm {
        self.form
    }

    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[&field]
    }

    pub fn submit_button(&self) -> &ButtonInput {
        &self.submit
    }

    pub fn focused(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn focused_id(&self) -> &'static str {
        self.focus.current_id()
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        match self.focus.current() {
            FocusTarget::Input(field) => self.input_mut(field).on_key(key),
            FocusTarget::Submit => self.submit.on_key(key),
        }
    }

    pub fn dispatch_text_action_to_focused(&mut self, action: TextAction) -> InteractionResult {
        match self.focus.current() {
            FocusTarget::Input(field) => self.input_mut(field).on_text_action(action),
            FocusTarget::Submit => InteractionResult::ignored(),
        }
    }

    /// Apply a widget action. Returns the submit outcome when the action
    /// triggered a submit.
    pub fn apply_action(&mut self, action: WidgetAction) -> Option<SubmitOutcome> {
        match action {
            WidgetAction::ValueChanged { value } => {
                if let FocusTarget::Input(field) = self.focus.current() {
                    self.form.set_value(field, value);
                }
                None
            }
            WidgetAction::InputDone => {
                self.focus.next();
                None
            }
            WidgetAction::SubmitRequested => Some(self.submit()),
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut TextInput {
        &mut self.inputs[&field]
    }
}
