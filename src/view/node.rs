use crate::form::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    TextBox,
    Button,
    Alert,
    Text,
}

/// What a node is bound to, so the renderer can pair it with a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Input(Field),
    Error(Field),
    Submit,
    Display(Field),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub role: Role,
    pub binding: Binding,
    pub label: Option<&'static str>,
    pub text: String,
    pub test_id: Option<&'static str>,
}

impl ViewNode {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            role: Role::Heading,
            binding: Binding::None,
            label: None,
            text: text.into(),
            test_id: None,
        }
    }

    pub fn input(field: Field, value: impl Into<String>) -> Self {
        Self {
            role: Role::TextBox,
            binding: Binding::Input(field),
            label: Some(field.label()),
            text: value.into(),
            test_id: None,
        }
    }

    pub fn error(field: Field, text: impl Into<String>) -> Self {
        Self {
            role: Role::Alert,
            binding: Binding::Error(field),
            label: None,
            text: text.into(),
            test_id: Some("error"),
        }
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self {
            role: Role::Button,
            binding: Binding::Submit,
            label: None,
            text: text.into(),
            test_id: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Text,
            binding: Binding::None,
            label: None,
            text: text.into(),
            test_id: None,
        }
    }

    pub fn display(field: Field, value: &str) -> Self {
        Self {
            role: Role::Text,
            binding: Binding::Display(field),
            label: None,
            text: format!("{}: {}", field.caption(), value),
            test_id: Some(field.display_test_id()),
        }
    }

    /// Input value for text boxes, visible text for everything else.
    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(&needle.to_lowercase())
    }
}
