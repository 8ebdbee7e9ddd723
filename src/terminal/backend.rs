use crate::ui::renderer::RenderFrame;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::cursor::{Hide, MoveTo, Show, position};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers as CrosstermKeyModifiers,
};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
    EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen, ScrollUp,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    AltScreen,

    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(TerminalSize),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub const FALLBACK: Self = Self {
        width: 80,
        height: 24,
    };

    /// Size of the controlling terminal, or 80x24 when there is none.
    pub fn probe() -> Self {
        terminal::size()
            .map(|(width, height)| Self { width, height })
            .unwrap_or(Self::FALLBACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Debug, Default)]
struct InlineState {
    block_start_row: u16,
    last_drawn_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InlineLayoutPlan {
    block_start_row: u16,
    draw_count: usize,
    skip: usize,
}

/// Fit a frame of `frame_len` lines below `prev_block_start_row`, shifting the
/// block up when it would run off the bottom of the screen.
fn plan_inline_layout(height: usize, frame_len: usize, prev_block_start_row: u16) -> InlineLayoutPlan {
    if height == 0 {
        return InlineLayoutPlan {
            block_start_row: 0,
            draw_count: 0,
            skip: 0,
        };
    }

    let max_row = height.saturating_sub(1) as u16;
    let mut block_start = prev_block_start_row.min(max_row) as usize;
    let desired_visible = frame_len.min(height);
    let available = height.saturating_sub(block_start);

    if desired_visible > available {
        let need = desired_visible.saturating_sub(available);
        block_start = block_start.saturating_sub(need.min(block_start));
    }

    let draw_count = frame_len.min(height.saturating_sub(block_start));
    InlineLayoutPlan {
        block_start_row: block_start.min(u16::MAX as usize) as u16,
        draw_count,
        skip: frame_len.saturating_sub(draw_count),
    }
}

pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    mode: RenderMode,
    inline: InlineState,
    last_frame: Vec<SpanLine>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            mode: RenderMode::default(),
            inline: InlineState::default(),
            last_frame: Vec::new(),
        })
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_inline(&self) -> bool {
        self.mode == RenderMode::Inline
    }

    pub fn set_size(&mut self, size: TerminalSize) {
        self.size = size;
    }

    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = TerminalSize { width, height };
        Ok(())
    }

    pub fn enter(&mut self) -> io::Result<()> {
        self.refresh_size()?;
        match self.mode {
            RenderMode::AltScreen => {
                terminal::enable_raw_mode()?;
                let setup = execute!(self.stdout, EnterAlternateScreen, Hide);
                undo_on_err(setup, terminal::disable_raw_mode)
            }
            RenderMode::Inline => {
                let (_, row) = position()?;
                self.inline.block_start_row = row.min(self.size.height.saturating_sub(1));
                terminal::enable_raw_mode()?;
                let setup = execute!(self.stdout, DisableLineWrap, Hide);
                undo_on_err(setup, terminal::disable_raw_mode)
            }
        }
    }

    /// Leave raw mode. The last frame stays visible: inline mode leaves it in
    /// place, alt-screen mode reprints it on the main screen.
    pub fn exit(&mut self) -> io::Result<()> {
        match self.mode {
            RenderMode::AltScreen => {
                terminal::disable_raw_mode()?;
                execute!(self.stdout, LeaveAlternateScreen, EnableLineWrap, Show)?;
                let lines = std::mem::take(&mut self.last_frame);
                for line in &lines {
                    self.write_span_line(line, self.size.width, false)?;
                    self.stdout.write_all(b"\n")?;
                }
            }
            RenderMode::Inline => {
                let max_row = self.size.height.saturating_sub(1);
                let last_row = self
                    .inline
                    .block_start_row
                    .saturating_add(self.inline.last_drawn_count.saturating_sub(1) as u16)
                    .min(max_row);
                queue!(self.stdout, MoveTo(0, last_row))?;
                execute!(self.stdout, EnableLineWrap, Show)?;
                terminal::disable_raw_mode()?;
                self.stdout.write_all(b"\r\n")?;
            }
        }
        self.stdout.flush()
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Ok(TerminalEvent::Key(map_key_event(key)))
            }
            CrosstermEvent::Resize(width, height) => {
                let size = TerminalSize { width, height };
                self.size = size;
                Ok(TerminalEvent::Resize(size))
            }
            _ => Ok(TerminalEvent::Tick),
        }
    }

    pub fn render_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        self.refresh_size()?;
        self.last_frame.clone_from(&frame.lines);
        match self.mode {
            RenderMode::AltScreen => self.render_altscreen(frame),
            RenderMode::Inline => self.render_inline(frame),
        }
    }
}

impl Terminal {
    fn render_altscreen(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let height = self.size.height as usize;
        let width = self.size.width;
        if height == 0 || width == 0 {
            return Ok(());
        }

        // Keep the cursor row on screen when the form is taller than the terminal.
        let max_offset = frame.lines.len().saturating_sub(height);
        let scroll_offset = match frame.cursor {
            Some(cur) => (cur.row as usize).saturating_sub(height.saturating_sub(1)),
            None => max_offset,
        }
        .min(max_offset);

        queue!(self.stdout, BeginSynchronizedUpdate, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row_idx, line) in frame.lines.iter().skip(scroll_offset).take(height).enumerate() {
            queue!(self.stdout, MoveTo(0, row_idx as u16))?;
            self.write_span_line(line, width, true)?;
        }
        self.place_cursor(frame.cursor, scroll_offset, 0, height)?;
        queue!(self.stdout, EndSynchronizedUpdate)?;
        self.stdout.flush()
    }

    fn render_inline(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let height = self.size.height as usize;
        let width = self.size.width;
        if height == 0 || width == 0 {
            return Ok(());
        }

        let prev_start = self.inline.block_start_row;
        let plan = plan_inline_layout(height, frame.lines.len(), prev_start);
        let scroll_up = prev_start.saturating_sub(plan.block_start_row);

        queue!(self.stdout, BeginSynchronizedUpdate, Hide)?;
        if scroll_up > 0 {
            queue!(
                self.stdout,
                MoveTo(0, self.size.height.saturating_sub(1)),
                ScrollUp(scroll_up)
            )?;
        }
        queue!(
            self.stdout,
            MoveTo(0, plan.block_start_row),
            Clear(ClearType::FromCursorDown)
        )?;

        for (visible_row, line) in frame
            .lines
            .iter()
            .skip(plan.skip)
            .take(plan.draw_count)
            .enumerate()
        {
            let target_row = plan.block_start_row.saturating_add(visible_row as u16);
            queue!(self.stdout, MoveTo(0, target_row))?;
            self.write_span_line(line, width, true)?;
        }
        self.place_cursor(frame.cursor, plan.skip, plan.block_start_row, plan.draw_count)?;

        self.inline.block_start_row = plan.block_start_row;
        self.inline.last_drawn_count = plan.draw_count;

        queue!(self.stdout, EndSynchronizedUpdate)?;
        self.stdout.flush()
    }

    fn place_cursor(
        &mut self,
        cursor: Option<CursorPos>,
        skip: usize,
        origin_row: u16,
        visible_rows: usize,
    ) -> io::Result<()> {
        let width = self.size.width;
        match cursor {
            Some(cur) if (cur.row as usize) >= skip && (cur.row as usize) - skip < visible_rows => {
                let row = origin_row.saturating_add((cur.row as usize - skip) as u16);
                let col = cur.col.min(width.saturating_sub(1));
                queue!(self.stdout, MoveTo(col, row), Show)?;
            }
            _ => queue!(self.stdout, Hide)?,
        }
        Ok(())
    }

    fn write_span_line(
        &mut self,
        line: &SpanLine,
        width: u16,
        keep_one_cell_margin: bool,
    ) -> io::Result<()> {
        let render_width = usize::from(if keep_one_cell_margin && width > 1 {
            width - 1
        } else {
            width
        });
        let mut used = 0usize;
        for span in line {
            if used >= render_width {
                break;
            }
            let clipped = clip_to_width(&span.text, render_width.saturating_sub(used));
            if clipped.is_empty() {
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if let Some(background) = span.style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(background)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(self.stdout, Print(clipped.as_str()), ResetColor)?;
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
            }
            used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        }
        Ok(())
    }
}

/// Run `undo` when `result` failed. The original error wins over any error
/// from `undo`.
fn undo_on_err(result: io::Result<()>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
    }
}

fn map_key_event(key: CrosstermKeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(key.code),
        modifiers: map_key_modifiers(key.modifiers),
    }
}

fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::BackTab => KeyCode::BackTab,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Home => KeyCode::Home,
        CrosstermKeyCode::End => KeyCode::End,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: CrosstermKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.contains(CrosstermKeyModifiers::SHIFT) {
        out.0 |= KeyModifiers::SHIFT.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::CONTROL) {
        out.0 |= KeyModifiers::CONTROL.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::ALT) {
        out.0 |= KeyModifiers::ALT.0;
    }
    out
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_setup_leaves_raw_mode() {
        let mut undone = false;
        let result = undo_on_err(Err(io::Error::other("no tty")), || {
            undone = true;
            Err(io::Error::other("disable failed"))
        });
        assert!(undone);
        assert_eq!(result.map_err(|e| e.to_string()), Err("no tty".to_string()));

        let mut undone = false;
        let result = undo_on_err(Ok(()), || {
            undone = true;
            Ok(())
        });
        assert!(result.is_ok());
        assert!(!undone);
    }

    #[test]
    fn inline_plan_fits_below_prompt() {
        let plan = plan_inline_layout(24, 10, 5);
        assert_eq!(
            plan,
            InlineLayoutPlan {
                block_start_row: 5,
                draw_count: 10,
                skip: 0,
            }
        );
    }

    #[test]
    fn inline_plan_shifts_up_near_bottom() {
        let plan = plan_inline_layout(24, 10, 20);
        assert_eq!(plan.block_start_row, 14);
        assert_eq!(plan.draw_count, 10);
    }

    #[test]
    fn inline_plan_skips_lines_taller_than_screen() {
        let plan = plan_inline_layout(8, 12, 3);
        assert_eq!(plan.block_start_row, 0);
        assert_eq!(plan.draw_count, 8);
        assert_eq!(plan.skip, 4);
    }

    #[test]
    fn clip_respects_wide_chars() {
        assert_eq!(clip_to_width("matt@matt.com", 4), "matt");
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("a\nb", 5), "ab");
        assert_eq!(clip_to_width("abc", 0), "");
    }

    #[test]
    fn maps_crossterm_keys() {
        let key = map_key_event(CrosstermKeyEvent::new(
            CrosstermKeyCode::Char('s'),
            CrosstermKeyModifiers::CONTROL,
        ));
        assert_eq!(key.code, KeyCode::Char('s'));
        assert!(key.modifiers.contains(KeyModifiers::CONTROL));
        assert!(!key.modifiers.contains(KeyModifiers::SHIFT));

        let key = map_key_event(CrosstermKeyEvent::new(
            CrosstermKeyCode::F(5),
            CrosstermKeyModifiers::NONE,
        ));
        assert_eq!(key.code, KeyCode::Unknown);
    }
}
