use super::text_edit;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextAction,
    TextEditState, WidgetAction,
};
use unicode_width::UnicodeWidthChar;

/// Indent of the value line below the label.
pub const VALUE_INDENT: &str = "  ";

pub struct TextInput {
    base: WidgetBase,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            value: String::new(),
            cursor: 0,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.set_value(&value.into());
        self
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::with_action(WidgetAction::ValueChanged {
            value: self.value.clone(),
        })
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let label_style = if focused {
            Style::new().color(Color::Cyan).bold()
        } else {
            Style::default()
        };

        let mut value_line = vec![Span::new(VALUE_INDENT).no_wrap()];
        match &self.placeholder {
            Some(ph) if self.value.is_empty() => {
                value_line.push(Span::styled(ph.clone(), Style::new().color(Color::DarkGrey)).no_wrap());
            }
            _ => value_line.push(Span::new(self.value.clone()).no_wrap()),
        }

        DrawOutput {
            lines: vec![
                vec![Span::styled(self.base.prefixed_label(focused), label_style).no_wrap()],
                value_line,
            ],
        }
    }
}

impl Interactive for TextInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
            return InteractionResult::ignored();
        }
        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        Some(TextEditState {
            value: &mut self.value,
            cursor: &mut self.cursor,
        })
    }

    fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        let Some(mut state) = self.text_editing() else {
            return InteractionResult::ignored();
        };
        if action.apply(&mut state) {
            return self.edited_result();
        }
        InteractionResult::ignored()
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let value_width: usize = self
            .value
            .chars()
            .take(text_edit::clamp_cursor(self.cursor, &self.value))
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum();
        Some(CursorPos {
            col: (VALUE_INDENT.len() + value_width) as u16,
            row: 1,
        })
    }

    fn value(&self) -> Option<String> {
        Some(self.value.clone())
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = text_edit::char_count(&self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crate::widgets::traits::{Interactive, TextAction, WidgetAction};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn typing_emits_value_changes() {
        let mut input = TextInput::new("email", "Email*");
        input.on_key(key(KeyCode::Char('a')));
        let result = input.on_key(key(KeyCode::Char('b')));
        assert_eq!(
            result.actions,
            vec![WidgetAction::ValueChanged {
                value: "ab".to_string()
            }]
        );
    }

    #[test]
    fn cursor_moves_and_inserts_mid_value() {
        let mut input = TextInput::new("firstName", "First Name*").with_default("Mthew");
        input.on_key(key(KeyCode::Home));
        input.on_key(key(KeyCode::Right));
        input.on_key(key(KeyCode::Char('a')));
        input.on_key(key(KeyCode::End));
        for _ in 0..3 {
            input.on_key(key(KeyCode::Left));
        }
        input.on_key(key(KeyCode::Char('t')));
        assert_eq!(input.value().as_deref(), Some("Matthew"));
    }

    #[test]
    fn control_chords_are_left_to_bindings() {
        let mut input = TextInput::new("message", "Message");
        let result = input.on_key(KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(!result.handled);
        assert_eq!(input.value().as_deref(), Some(""));
    }

    #[test]
    fn enter_finishes_input() {
        let mut input = TextInput::new("lastName", "Last Name*");
        let result = input.on_key(key(KeyCode::Enter));
        assert_eq!(result.actions, vec![WidgetAction::InputDone]);
    }

    #[test]
    fn word_delete_reports_change() {
        let mut input = TextInput::new("message", "Message").with_default("test message");
        let result = input.on_text_action(TextAction::DeleteWordLeft);
        assert_eq!(
            result.actions,
            vec![WidgetAction::ValueChanged {
                value: "test ".to_string()
            }]
        );
    }
}
