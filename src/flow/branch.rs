//! Branch-naming flow: branch type → board → ticket id → description.
//!
//! The current step is a tagged enum that carries only the choices made so far, so a
//! step can never be reached with an earlier choice missing. The board step is
//! skipped when the configuration has no boards.

use crate::core::state::{BoardOption, BranchTypeOption, Configuration};
use crate::flow::line_input::LineInput;
use crate::flow::option_list::OptionList;
use crate::flow::{is_escape, is_interrupt, Flow, Transition};
use crossterm::event::{KeyCode, KeyEvent};

pub const DESCRIPTION_PLACEHOLDER: &str = "short-message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchStep {
    SelectBranchType,
    SelectBoard {
        branch_type: BranchTypeOption,
    },
    EnterTicketId {
        branch_type: BranchTypeOption,
        board: Option<BoardOption>,
    },
    EnterDescription {
        branch_type: BranchTypeOption,
        board: Option<BoardOption>,
        ticket_id: String,
    },
    Done {
        branch_name: String,
    },
}

impl BranchStep {
    pub fn title(&self) -> &'static str {
        match self {
            BranchStep::SelectBranchType => "Select branch type",
            BranchStep::SelectBoard { .. } => "Select board",
            BranchStep::EnterTicketId { .. } => "Enter ticket id",
            BranchStep::EnterDescription { .. } | BranchStep::Done { .. } => "Enter branch name",
        }
    }
}

/// What the branch flow hands to the git gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRequest {
    pub branch_name: String,
}

/// `<type>/<ticketId>/<description>`, joined literally
pub fn compose_branch_name(branch_type: &str, ticket_id: &str, description: &str) -> String {
    format!("{branch_type}/{ticket_id}/{description}")
}

#[derive(Debug)]
pub struct BranchFlow {
    step: BranchStep,
    branch_types: OptionList<BranchTypeOption>,
    boards: OptionList<BoardOption>,
    ticket_input: LineInput,
    description_input: LineInput,
    hint: Option<&'static str>,
}

impl BranchFlow {
    pub fn new(config: &Configuration) -> Self {
        let mut ticket_input = LineInput::new("");
        ticket_input.focus();

        Self {
            step: BranchStep::SelectBranchType,
            branch_types: OptionList::new("Select branch type", config.branch_types.clone()),
            boards: OptionList::new("Select board", config.boards.clone()),
            ticket_input,
            description_input: LineInput::new(DESCRIPTION_PLACEHOLDER),
            hint: None,
        }
    }

    pub fn step(&self) -> &BranchStep {
        &self.step
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.hint
    }

    pub fn branch_types_mut(&mut self) -> &mut OptionList<BranchTypeOption> {
        &mut self.branch_types
    }

    pub fn boards_mut(&mut self) -> &mut OptionList<BoardOption> {
        &mut self.boards
    }

    pub fn ticket_input(&self) -> &LineInput {
        &self.ticket_input
    }

    pub fn ticket_input_mut(&mut self) -> &mut LineInput {
        &mut self.ticket_input
    }

    pub fn description_input_mut(&mut self) -> &mut LineInput {
        &mut self.description_input
    }

    /// The branch name as composed from what has been entered so far
    pub fn preview(&self) -> String {
        match &self.step {
            BranchStep::SelectBranchType => compose_branch_name("", "", ""),
            BranchStep::SelectBoard { branch_type } => {
                compose_branch_name(&branch_type.code, "", "")
            }
            BranchStep::EnterTicketId { branch_type, .. } => {
                compose_branch_name(&branch_type.code, &self.ticket_input.value(), "")
            }
            BranchStep::EnterDescription {
                branch_type,
                ticket_id,
                ..
            } => compose_branch_name(
                &branch_type.code,
                ticket_id,
                &self.description_input.value(),
            ),
            BranchStep::Done { branch_name } => branch_name.clone(),
        }
    }

    fn after_branch_type(&mut self, branch_type: BranchTypeOption) -> BranchStep {
        if self.boards.is_empty() {
            self.ticket_input.set_value("");
            BranchStep::EnterTicketId {
                branch_type,
                board: None,
            }
        } else {
            BranchStep::SelectBoard { branch_type }
        }
    }

    fn after_board(&mut self, branch_type: BranchTypeOption, board: BoardOption) -> BranchStep {
        self.ticket_input.set_value(&board.ticket_prefix());
        BranchStep::EnterTicketId {
            branch_type,
            board: Some(board),
        }
    }

    fn step_transition(
        &mut self,
        step: BranchStep,
        key: KeyEvent,
    ) -> (BranchStep, Transition<BranchRequest>) {
        match step {
            BranchStep::SelectBranchType => {
                if !self.branch_types.is_filtering() && is_escape(key) {
                    return (BranchStep::SelectBranchType, Transition::Cancel);
                }
                match self.branch_types.handle_key(key) {
                    Some(branch_type) => {
                        (self.after_branch_type(branch_type), Transition::Continue)
                    }
                    None => (BranchStep::SelectBranchType, Transition::Continue),
                }
            }
            BranchStep::SelectBoard { branch_type } => {
                if !self.boards.is_filtering() && is_escape(key) {
                    return (BranchStep::SelectBoard { branch_type }, Transition::Cancel);
                }
                match self.boards.handle_key(key) {
                    Some(board) => (self.after_board(branch_type, board), Transition::Continue),
                    None => (BranchStep::SelectBoard { branch_type }, Transition::Continue),
                }
            }
            BranchStep::EnterTicketId { branch_type, board } => {
                if is_escape(key) {
                    let current = BranchStep::EnterTicketId { branch_type, board };
                    return (current, Transition::Cancel);
                }
                if key.code != KeyCode::Enter {
                    self.ticket_input.input(key);
                    self.hint = None;
                    let current = BranchStep::EnterTicketId { branch_type, board };
                    return (current, Transition::Continue);
                }

                let ticket_id = self.ticket_input.value();
                if ticket_id.trim().is_empty() {
                    self.hint = Some("A ticket id is required");
                    let current = BranchStep::EnterTicketId { branch_type, board };
                    return (current, Transition::Continue);
                }

                self.hint = None;
                self.ticket_input.blur();
                self.description_input.focus();
                (
                    BranchStep::EnterDescription {
                        branch_type,
                        board,
                        ticket_id,
                    },
                    Transition::Continue,
                )
            }
            BranchStep::EnterDescription {
                branch_type,
                board,
                ticket_id,
            } => {
                if is_escape(key) {
                    let current = BranchStep::EnterDescription {
                        branch_type,
                        board,
                        ticket_id,
                    };
                    return (current, Transition::Cancel);
                }
                if key.code != KeyCode::Enter {
                    self.description_input.input(key);
                    let current = BranchStep::EnterDescription {
                        branch_type,
                        board,
                        ticket_id,
                    };
                    return (current, Transition::Continue);
                }

                let branch_name = compose_branch_name(
                    &branch_type.code,
                    &ticket_id,
                    &self.description_input.value(),
                );
                self.description_input.blur();
                let request = BranchRequest {
                    branch_name: branch_name.clone(),
                };
                (BranchStep::Done { branch_name }, Transition::Submit(request))
            }
            done @ BranchStep::Done { .. } => (done, Transition::Continue),
        }
    }
}

impl Flow for BranchFlow {
    type Request = BranchRequest;

    fn handle_key(&mut self, key: KeyEvent) -> Transition<BranchRequest> {
        if is_interrupt(key) {
            return Transition::Cancel;
        }
        let step = std::mem::replace(&mut self.step, BranchStep::SelectBranchType);
        let (next, transition) = self.step_transition(step, key);
        self.step = next;
        transition
    }
}
