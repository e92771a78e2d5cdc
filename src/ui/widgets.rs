//! Drawing helpers shared by the branch and commit screens.

use crate::core::colors::Palette;
use crate::core::state::ListOption;
use crate::flow::line_input::LineInput;
use crate::flow::option_list::{FilterState, OptionList};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub const LIST_HELP: &str = "↑/k up • ↓/j down • / filter • enter select • esc quit";
pub const FILTER_HELP: &str = "type to filter • enter apply • esc clear";

/// Draw a single-line field; `completion` is shown dimmed from the cursor onwards
pub fn render_line_input(
    frame: &mut Frame,
    area: Rect,
    input: &mut LineInput,
    palette: &Palette,
    completion: Option<&str>,
) {
    let focused = input.is_focused();
    let textarea = input.textarea_mut();
    textarea.set_cursor_style(if focused {
        palette.cursor
    } else {
        Style::default()
    });
    textarea.set_style(if focused {
        Style::default()
    } else {
        palette.blurred
    });
    textarea.set_placeholder_style(palette.hint);
    frame.render_widget(&*textarea, area);

    if let Some(rest) = completion {
        let (_, column) = textarea.cursor();
        let x = area.x.saturating_add(column as u16);
        if x < area.right() {
            let ghost = Rect::new(x, area.y, area.right() - x, 1);
            frame.render_widget(Paragraph::new(rest).style(palette.hint), ghost);
        }
    }
}

/// `> ` prompt followed by the field
pub fn render_prompted_input(frame: &mut Frame, area: Rect, input: &mut LineInput, palette: &Palette) {
    let [prompt_area, input_area] =
        Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(area);
    let prompt_style = palette.focus_style(input.is_focused());
    frame.render_widget(Paragraph::new(Span::styled("> ", prompt_style)), prompt_area);
    render_line_input(frame, input_area, input, palette, None);
}

pub fn render_option_list<T: ListOption + Clone>(
    frame: &mut Frame,
    area: Rect,
    list: &mut OptionList<T>,
    palette: &Palette,
) {
    let [filter_area, rows_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

    match list.filter_state() {
        FilterState::Unfiltered => {}
        state => {
            let mut spans = vec![
                Span::styled("Filter: ", palette.filter),
                Span::raw(list.filter().to_string()),
            ];
            if state == FilterState::Filtering {
                spans.push(Span::styled(" ", palette.cursor));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), filter_area);
        }
    }

    let visible = list.visible_items();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No matching options").style(palette.hint),
            rows_area,
        );
        return;
    }

    let code_width = visible
        .iter()
        .map(|item| item.title().chars().count())
        .max()
        .unwrap_or(0);
    let rows: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<code_width$}  ", item.title())),
                Span::styled(item.description().to_string(), palette.description),
            ]))
        })
        .collect();

    let widget = List::new(rows)
        .highlight_style(palette.selected_row)
        .highlight_symbol("> ");
    frame.render_stateful_widget(widget, rows_area, list.list_state_mut());
}

/// Bottom line: the pending hint as a warning, otherwise the key help
pub fn render_help(frame: &mut Frame, area: Rect, hint: Option<&str>, help: &str, palette: &Palette) {
    let line = match hint {
        Some(hint) => Paragraph::new(hint.to_string()).style(palette.warning),
        None => Paragraph::new(help.to_string()).style(palette.hint),
    };
    frame.render_widget(line, area);
}
