//! Unified color palette for the interactive screens.
//!
//! All screen styling comes from one [`Palette`] value that is built once at startup
//! and passed by reference into the rendering layer.
//!
//! # Color Scheme
//! - **Accent**: Light blue for the focused field, selected row and commit button
//! - **Step title**: Black on violet
//! - **Preview**: Peach for the branch name being composed
//! - **Command**: Pale blue for the `git commit` preview
//! - **Staged**: Mint for staged file paths
//! - **Muted**: Grey for blurred fields, hints and descriptions

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0x6f, 0xd0, 0xfb);
const STEP_TITLE_BG: Color = Color::Rgb(0xda, 0x8b, 0xff);
const PREVIEW: Color = Color::Rgb(0xfc, 0xbd, 0xa1);
const COMMAND: Color = Color::Rgb(0xa1, 0xe0, 0xfc);
const STAGED: Color = Color::Rgb(0x10, 0xff, 0xcb);
const MUTED: Color = Color::Indexed(240);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub focused: Style,
    pub blurred: Style,
    pub step_title: Style,
    pub preview: Style,
    pub command: Style,
    pub staged: Style,
    pub description: Style,
    pub selected_row: Style,
    pub filter: Style,
    pub hint: Style,
    pub warning: Style,
    pub cursor: Style,
}

impl Default for Palette {
    fn default() -> Self {
        let focused = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        Self {
            focused,
            blurred: Style::default().fg(MUTED),
            step_title: Style::default().fg(Color::Black).bg(STEP_TITLE_BG),
            preview: Style::default().fg(PREVIEW),
            command: Style::default().fg(COMMAND),
            staged: Style::default().fg(STAGED),
            description: Style::default().fg(MUTED),
            selected_row: focused,
            filter: Style::default().fg(Color::Yellow),
            hint: Style::default().fg(MUTED),
            warning: Style::default().fg(Color::LightRed),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

impl Palette {
    /// Style for a field label or button depending on focus
    pub fn focus_style(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            Style::default()
        }
    }
}
