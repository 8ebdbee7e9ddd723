use crate::terminal::TerminalSize;
use crate::ui::renderer::RenderFrame;
use crate::ui::span::WrapMode;
use crate::ui::style::Color;

pub fn frame_to_json(frame: &RenderFrame, size: TerminalSize) -> serde_json::Value {
    let cursor = frame.cursor.map(|c| {
        serde_json::json!({
            "row": c.row,
            "col": c.col,
        })
    });

    let lines = frame
        .lines
        .iter()
        .map(|line| {
            serde_json::Value::Array(
                line.iter()
                    .map(|span| {
                        serde_json::json!({
                            "text": span.text,
                            "wrap_mode": match span.wrap_mode {
                                WrapMode::NoWrap => "no_wrap",
                                WrapMode::Wrap => "wrap",
                            },
                            "style": {
                                "color": span.style.color.map(color_name),
                                "background": span.style.background.map(color_name),
                                "bold": span.style.bold,
                            }
                        })
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "terminal": {
            "width": size.width,
            "height": size.height,
        },
        "cursor": cursor,
        "lines": lines,
    })
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::DarkGrey => "dark_grey",
        Color::Red => "red",
        Color::Green => "green",
        Color::Blue => "blue",
        Color::Cyan => "cyan",
        Color::White => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::frame_to_json;
    use crate::form::ContactForm;
    use crate::state::app_state::AppState;
    use crate::terminal::TerminalSize;
    use crate::ui::renderer::Renderer;

    #[test]
    fn dump_carries_cursor_and_styles() {
        let state = AppState::new(ContactForm::new());
        let frame = Renderer::default().render(&state);
        let json = frame_to_json(
            &frame,
            TerminalSize {
                width: 80,
                height: 24,
            },
        );

        assert_eq!(json["terminal"]["width"], 80);
        assert_eq!(json["cursor"]["row"], 3);
        assert_eq!(json["lines"][0][0]["text"], "Contact Form");
        assert_eq!(json["lines"][0][0]["style"]["color"], "cyan");
        assert_eq!(json["lines"][0][0]["style"]["bold"], true);
    }
}
