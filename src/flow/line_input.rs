//! Single-line text field on top of `tui_textarea`.
//!
//! Keys that would insert a line break or a tab never reach the textarea; the
//! flows use Enter and Tab for their own transitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use tui_textarea::{CursorMove, TextArea};

pub struct LineInput {
    textarea: TextArea<'static>,
    placeholder: &'static str,
    char_limit: Option<usize>,
    focused: bool,
}

impl LineInput {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            textarea: build_textarea("", placeholder),
            placeholder,
            char_limit: None,
            focused: false,
        }
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn value(&self) -> String {
        self.textarea.lines().concat()
    }

    /// Replace the content and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        let value: String = match self.char_limit {
            Some(limit) => value.chars().take(limit).collect(),
            None => value.to_string(),
        };
        self.textarea = build_textarea(&value, self.placeholder);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Feed an editing key. Returns whether the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => return false,
            KeyCode::Char('m' | 'j') if ctrl => return false,
            KeyCode::Char(_) if !ctrl && self.is_full() => return false,
            _ => {}
        }
        self.textarea.input(key)
    }

    fn is_full(&self) -> bool {
        self.char_limit
            .is_some_and(|limit| self.value().chars().count() >= limit)
    }
}

impl fmt::Debug for LineInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineInput")
            .field("value", &self.value())
            .field("char_limit", &self.char_limit)
            .field("focused", &self.focused)
            .finish()
    }
}

fn build_textarea(value: &str, placeholder: &'static str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value.to_string()]);
    textarea.set_placeholder_text(placeholder);
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}
