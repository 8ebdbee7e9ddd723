use crate::state::app_state::AppState;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::view::{Binding, Role};
use crate::widgets::traits::{Drawable, Interactive, RenderContext};

const KEY_HINT: &str = "Tab/↓ next · Shift-Tab/↑ back · Ctrl+S submit · Esc quit";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

impl RenderFrame {
    fn push(&mut self, line: SpanLine) {
        self.lines.push(line);
    }

    fn row(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    pub show_hint: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { show_hint: true }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Draw the form's view tree. Inputs and the submit button are drawn by
    /// their widgets; everything else comes straight from the view.
    pub fn render(&self, state: &AppState) -> RenderFrame {
        let mut frame = RenderFrame::default();
        let exiting = state.should_exit();
        let ctx = RenderContext {
            focused_id: (!exiting).then(|| state.focused_id().to_string()),
        };
        let view = state.form().view();

        for node in view.nodes() {
            match (node.role, node.binding) {
                (Role::Heading, _) => {
                    frame.push(vec![Span::styled(
                        node.text.clone(),
                        Style::new().color(Color::Cyan).bold(),
                    )]);
                    frame.push(Vec::new());
                }
                (Role::TextBox, Binding::Input(field)) => {
                    let input = state.input(field);
                    let row = frame.row();
                    if ctx.is_focused(input.id()) {
                        if let Some(local) = input.cursor_pos() {
                            frame.cursor = Some(CursorPos {
                                col: local.col,
                                row: row.saturating_add(local.row),
                            });
                        }
                    }
                    frame.lines.extend(input.draw(&ctx).lines);
                }
                (Role::Alert, _) => {
                    frame.push(vec![Span::styled(
                        format!("  ! {}", node.text),
                        Style::new().color(Color::Red),
                    )]);
                }
                (Role::Button, _) => {
                    frame.push(Vec::new());
                    frame.lines.extend(state.submit_button().draw(&ctx).lines);
                }
                (Role::Text, Binding::Display(_)) => {
                    frame.push(vec![Span::styled(
                        format!("  {}", node.text),
                        Style::new().color(Color::Green),
                    )]);
                }
                (Role::Text, _) => {
                    frame.push(Vec::new());
                    frame.push(vec![Span::styled(
                        node.text.clone(),
                        Style::new().color(Color::Green).bold(),
                    )]);
                }
                (Role::TextBox, _) => {}
            }
        }

        if self.config.show_hint && !exiting {
            frame.push(Vec::new());
            frame.push(vec![
                Span::styled(KEY_HINT, Style::new().color(Color::DarkGrey)).no_wrap(),
            ]);
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{Renderer, RendererConfig};
    use crate::form::{ContactForm, Field};
    use crate::state::app_state::AppState;
    use crate::terminal::CursorPos;
    use crate::ui::span::Span;

    fn line_text(line: &[Span]) -> String {
        line.iter().map(|span| span.text.as_str()).collect()
    }

    fn texts(state: &AppState) -> Vec<String> {
        Renderer::new(RendererConfig { show_hint: false })
            .render(state)
            .lines
            .iter()
            .map(|line| line_text(line))
            .collect()
    }

    #[test]
    fn initial_frame_focuses_first_name() {
        let state = AppState::new(ContactForm::new());
        let frame = Renderer::default().render(&state);

        let lines: Vec<String> = frame.lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(lines[0], "Contact Form");
        assert_eq!(lines[2], "> First Name*");
        assert_eq!(frame.cursor, Some(CursorPos { col: 2, row: 3 }));
    }

    #[test]
    fn exit_frame_drops_focus_and_hint() {
        let mut state = AppState::new(ContactForm::new());
        state.request_exit();
        let frame = Renderer::default().render(&state);

        assert_eq!(frame.cursor, None);
        let last = frame.lines.last().map(|l| line_text(l)).unwrap_or_default();
        assert_eq!(last, "  [ Submit ]");
    }

    #[test]
    fn errors_render_under_their_input() {
        let mut form = ContactForm::new();
        form.type_text(Field::FirstName, "asdf");
        let state = AppState::new(form);

        let lines = texts(&state);
        assert_eq!(lines[3], "  asdf");
        assert_eq!(lines[4], "  ! error: firstName must have at least 5 characters.");
    }

    #[test]
    fn summary_renders_after_submit() {
        let mut form = ContactForm::new();
        form.type_text(Field::FirstName, "Matthew");
        form.type_text(Field::LastName, "Phillips");
        form.type_text(Field::Email, "matt@matt.com");
        assert!(form.submit().is_accepted());
        let state = AppState::new(form);

        let lines = texts(&state);
        assert!(lines.iter().any(|l| l == "You Submitted:"));
        assert!(lines.iter().any(|l| l == "  Email: matt@matt.com"));
        assert!(!lines.iter().any(|l| l.starts_with("  Message:")));
    }
}
