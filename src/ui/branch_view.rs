use crate::core::colors::Palette;
use crate::flow::branch::{BranchFlow, BranchStep};
use crate::ui::widgets::{
    render_help, render_option_list, render_prompted_input, FILTER_HELP, LIST_HELP,
};
use crate::ui::Screen;
use ratatui::{
    layout::{Constraint, Layout},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const INPUT_HELP: &str = "enter confirm • esc quit";

enum Body {
    BranchTypes,
    Boards,
    TicketId,
    Description,
}

impl Screen for BranchFlow {
    fn render(&mut self, frame: &mut Frame, palette: &Palette) {
        let [preview_area, _, title_area, _, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(self.preview()).style(palette.preview),
            preview_area,
        );
        let title = format!(" {} ", self.step().title());
        frame.render_widget(
            Paragraph::new(Span::styled(title, palette.step_title)),
            title_area,
        );

        let body = match self.step() {
            BranchStep::SelectBranchType => Body::BranchTypes,
            BranchStep::SelectBoard { .. } => Body::Boards,
            BranchStep::EnterTicketId { .. } => Body::TicketId,
            BranchStep::EnterDescription { .. } | BranchStep::Done { .. } => Body::Description,
        };

        let help = match body {
            Body::BranchTypes => {
                let list = self.branch_types_mut();
                render_option_list(frame, body_area, list, palette);
                if list.is_filtering() {
                    FILTER_HELP
                } else {
                    LIST_HELP
                }
            }
            Body::Boards => {
                let list = self.boards_mut();
                render_option_list(frame, body_area, list, palette);
                if list.is_filtering() {
                    FILTER_HELP
                } else {
                    LIST_HELP
                }
            }
            Body::TicketId => {
                render_prompted_input(frame, body_area, self.ticket_input_mut(), palette);
                INPUT_HELP
            }
            Body::Description => {
                render_prompted_input(frame, body_area, self.description_input_mut(), palette);
                INPUT_HELP
            }
        };

        render_help(frame, help_area, self.hint(), help, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Configuration;
    use crate::flow::Flow;
    use crate::ui::test_support::buffer_text;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(flow: &mut BranchFlow) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let palette = Palette::default();
        terminal.draw(|frame| flow.render(frame, &palette)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn press(flow: &mut BranchFlow, code: KeyCode) {
        flow.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_branch_type_step_lists_options() {
        let mut flow = BranchFlow::new(&Configuration::default());
        let screen = draw(&mut flow);

        assert!(screen.contains("Select branch type"));
        assert!(screen.contains("> FEAT"));
        assert!(screen.contains("A bug fix"));
        assert!(screen.contains("esc quit"));
    }

    #[test]
    fn test_filter_line_is_shown() {
        let mut flow = BranchFlow::new(&Configuration::default());
        press(&mut flow, KeyCode::Char('/'));
        press(&mut flow, KeyCode::Char('o'));
        let screen = draw(&mut flow);

        assert!(screen.contains("Filter: o"));
        assert!(screen.contains("OPS"));
        assert!(screen.contains("CHORE"));
        assert!(!screen.contains("FEAT"));
    }

    #[test]
    fn test_ticket_step_shows_prefix_and_preview() {
        let mut flow = BranchFlow::new(&Configuration::default());
        press(&mut flow, KeyCode::Enter);
        press(&mut flow, KeyCode::Down);
        press(&mut flow, KeyCode::Enter);
        let screen = draw(&mut flow);

        assert!(screen.contains("Enter ticket id"));
        assert!(screen.contains("> IB-"));
        assert!(screen.contains("FEAT/IB-/"));
    }

    #[test]
    fn test_blank_ticket_hint_is_drawn() {
        let mut flow = BranchFlow::new(&Configuration {
            branch_types: Configuration::default_branch_types(),
            boards: vec![],
        });
        press(&mut flow, KeyCode::Enter);
        press(&mut flow, KeyCode::Enter);
        let screen = draw(&mut flow);

        assert!(screen.contains("A ticket id is required"));
    }

    #[test]
    fn test_description_placeholder() {
        let mut flow = BranchFlow::new(&Configuration {
            branch_types: Configuration::default_branch_types(),
            boards: vec![],
        });
        press(&mut flow, KeyCode::Enter);
        press(&mut flow, KeyCode::Char('7'));
        press(&mut flow, KeyCode::Enter);
        let screen = draw(&mut flow);

        assert!(screen.contains("Enter branch name"));
        assert!(screen.contains("short-message"));
    }
}
