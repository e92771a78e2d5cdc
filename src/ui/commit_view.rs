use crate::core::colors::Palette;
use crate::core::templates::{render_template, TemplateContext, TEMPLATES};
use crate::flow::commit::{CommitFlow, CommitFocus};
use crate::ui::widgets::{render_help, render_line_input};
use crate::ui::Screen;
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

const HELP: &str = "tab/↓ next • shift+tab/↑ previous • enter on [ Commit ] to commit • esc quit";

impl Screen for CommitFlow {
    fn render(&mut self, frame: &mut Frame, palette: &Palette) {
        let [header_area, command_area, _, message_label, message_area, _, flags_label, flags_area, _, button_area, _, staged_label, staged_area, help_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        let header = render_template(
            TEMPLATES.header_branch,
            &TemplateContext {
                branch_name: Some(self.branch()),
                ..Default::default()
            },
        );
        frame.render_widget(Paragraph::new(header).style(palette.preview), header_area);
        frame.render_widget(
            Paragraph::new(self.command_preview()).style(palette.command),
            command_area,
        );

        let focus = self.focus();
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Commit message",
                palette.focus_style(focus == CommitFocus::Message),
            )),
            message_label,
        );
        render_line_input(frame, message_area, self.message_input_mut(), palette, None);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Flags",
                palette.focus_style(focus == CommitFocus::Flags),
            )),
            flags_label,
        );
        let completion = self.pending_completion();
        render_line_input(frame, flags_area, self.flags_input_mut(), palette, completion);

        let button_style = if focus == CommitFocus::Submit {
            palette.focused
        } else {
            palette.blurred
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[ Commit ]", button_style)),
            button_area,
        );

        frame.render_widget(Paragraph::new("Staged changes:"), staged_label);
        let staged: Vec<ListItem> = self
            .staged_files()
            .iter()
            .map(|path| ListItem::new(Line::from(Span::styled(format!("  {path}"), palette.staged))))
            .collect();
        frame.render_widget(List::new(staged), staged_area);

        render_help(frame, help_area, self.hint(), HELP, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Flow;
    use crate::ui::test_support::buffer_text;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(flow: &mut CommitFlow) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let palette = Palette::default();
        terminal.draw(|frame| flow.render(frame, &palette)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn press(flow: &mut CommitFlow, code: KeyCode) {
        flow.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn staged() -> Vec<String> {
        vec!["src/a.go".to_string(), "src/b.go".to_string()]
    }

    #[test]
    fn test_header_preview_and_staged_files() {
        let mut flow = CommitFlow::new("fix/IB-42/cleanup", staged());
        let screen = draw(&mut flow);

        assert!(screen.contains("Branch: fix/IB-42/cleanup"));
        assert!(screen.contains("git commit -m \"[FIX] [IB-42] \""));
        assert!(screen.contains("Staged changes:"));
        assert!(screen.contains("src/a.go"));
        assert!(screen.contains("src/b.go"));
        assert!(screen.contains("[ Commit ]"));
    }

    #[test]
    fn test_flags_placeholder_and_completion() {
        let mut flow = CommitFlow::new("main", staged());
        assert!(draw(&mut flow).contains("Commit flags"));

        press(&mut flow, KeyCode::Tab);
        for c in "--sig".chars() {
            press(&mut flow, KeyCode::Char(c));
        }
        assert!(draw(&mut flow).contains("--signoff"));
    }

    #[test]
    fn test_blank_message_hint_is_drawn() {
        let mut flow = CommitFlow::new("main", staged());
        press(&mut flow, KeyCode::Up);
        press(&mut flow, KeyCode::Enter);
        assert!(draw(&mut flow).contains("A commit message is required"));
    }
}
