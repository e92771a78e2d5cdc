//! Commit-message flow: message field, flags field and a commit button.
//!
//! The message is pre-seeded from the current branch name when it has the
//! `<type>/<ticketId>/<description>` shape. Focus cycles over the two fields and the
//! button in both directions; Enter on the button submits.

use crate::core::templates::{render_template, TemplateContext, TEMPLATES};
use crate::flow::focus::FocusRing;
use crate::flow::line_input::LineInput;
use crate::flow::{is_escape, is_interrupt, Flow, Transition};
use crossterm::event::{KeyCode, KeyEvent};

pub const MESSAGE_CHAR_LIMIT: usize = 72;
pub const FLAGS_PLACEHOLDER: &str = "Commit flags";

/// Flags offered for completion in the flags field
pub const COMMIT_FLAG_SUGGESTIONS: &[&str] = &[
    "--message",
    "--all",
    "--patch",
    "--reuse-message",
    "--amend",
    "--signoff",
    "--no-verify",
    "--allow-empty",
    "--no-edit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitFocus {
    Message,
    Flags,
    Submit,
}

/// What the commit flow hands to the git gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub message: String,
    pub flags: Vec<String>,
}

impl CommitRequest {
    pub fn new(message: impl Into<String>, raw_flags: &str) -> Self {
        Self {
            message: message.into(),
            flags: split_flags(raw_flags),
        }
    }
}

/// Split the flags field into separate argv tokens
pub fn split_flags(raw_flags: &str) -> Vec<String> {
    raw_flags.split_whitespace().map(str::to_string).collect()
}

/// `[TYPE] [TICKET] ` for branches shaped `<type>/<ticketId>/<description>`.
///
/// Returns `None` for any other shape; the flow then starts with an empty message.
pub fn message_prefill(branch: &str) -> Option<String> {
    let segments: Vec<&str> = branch.split('/').collect();
    if segments.len() < 3 {
        return None;
    }

    let branch_type = segments[0].to_uppercase();
    let ticket_id = segments[1].to_uppercase();
    let context = TemplateContext {
        branch_type: Some(&branch_type),
        ticket_id: Some(&ticket_id),
        ..Default::default()
    };
    Some(render_template(TEMPLATES.commit_prefill, &context))
}

/// Remainder of the first suggestion that extends the last word of `raw_flags`
pub fn flag_completion(raw_flags: &str) -> Option<&'static str> {
    if raw_flags.ends_with(char::is_whitespace) {
        return None;
    }
    let word = raw_flags.split_whitespace().last()?;
    if !word.starts_with('-') {
        return None;
    }
    COMMIT_FLAG_SUGGESTIONS
        .iter()
        .copied()
        .find(|flag| flag.len() > word.len() && flag.starts_with(word))
        .map(|flag| &flag[word.len()..])
}

#[derive(Debug)]
pub struct CommitFlow {
    branch: String,
    staged_files: Vec<String>,
    message_input: LineInput,
    flags_input: LineInput,
    focus: FocusRing<CommitFocus>,
    hint: Option<&'static str>,
    submitted: bool,
}

impl CommitFlow {
    pub fn new(branch: impl Into<String>, staged_files: Vec<String>) -> Self {
        let branch = branch.into();

        let mut message_input = LineInput::new("").with_char_limit(MESSAGE_CHAR_LIMIT);
        match message_prefill(&branch) {
            Some(prefill) => message_input.set_value(&prefill),
            None => log::debug!("Branch '{branch}' has no <type>/<ticket>/ shape, no prefill"),
        }
        message_input.focus();

        Self {
            branch,
            staged_files,
            message_input,
            flags_input: LineInput::new(FLAGS_PLACEHOLDER),
            focus: FocusRing::new(vec![
                CommitFocus::Message,
                CommitFocus::Flags,
                CommitFocus::Submit,
            ]),
            hint: None,
            submitted: false,
        }
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn staged_files(&self) -> &[String] {
        &self.staged_files
    }

    pub fn focus(&self) -> CommitFocus {
        self.focus.current()
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.hint
    }

    pub fn message(&self) -> String {
        self.message_input.value()
    }

    pub fn raw_flags(&self) -> String {
        self.flags_input.value()
    }

    pub fn message_input_mut(&mut self) -> &mut LineInput {
        &mut self.message_input
    }

    pub fn flags_input_mut(&mut self) -> &mut LineInput {
        &mut self.flags_input
    }

    /// Completion shown after the cursor while the flags field is focused
    pub fn pending_completion(&self) -> Option<&'static str> {
        if self.focus() != CommitFocus::Flags {
            return None;
        }
        flag_completion(&self.raw_flags())
    }

    /// `git commit -m "<message>" <flags>` as currently entered
    pub fn command_preview(&self) -> String {
        let message = self.message();
        let flags = self.raw_flags();
        let context = TemplateContext {
            message: Some(&message),
            flags: Some(&flags),
            ..Default::default()
        };
        render_template(TEMPLATES.command_preview, &context)
    }

    fn move_focus(&mut self, forward: bool) {
        let target = if forward {
            self.focus.next()
        } else {
            self.focus.previous()
        };
        self.message_input.blur();
        self.flags_input.blur();
        match target {
            CommitFocus::Message => self.message_input.focus(),
            CommitFocus::Flags => self.flags_input.focus(),
            CommitFocus::Submit => {}
        }
    }

    fn accept_completion(&mut self) -> bool {
        match self.pending_completion() {
            Some(rest) => {
                let completed = format!("{}{rest}", self.raw_flags());
                self.flags_input.set_value(&completed);
                true
            }
            None => false,
        }
    }

    fn submit(&mut self) -> Transition<CommitRequest> {
        let message = self.message();
        if message.trim().is_empty() {
            self.hint = Some("A commit message is required");
            return Transition::Continue;
        }
        self.submitted = true;
        Transition::Submit(CommitRequest::new(message, &self.raw_flags()))
    }
}

impl Flow for CommitFlow {
    type Request = CommitRequest;

    fn handle_key(&mut self, key: KeyEvent) -> Transition<CommitRequest> {
        if is_interrupt(key) || is_escape(key) {
            return Transition::Cancel;
        }
        if self.submitted {
            return Transition::Continue;
        }

        match key.code {
            KeyCode::Enter if self.focus() == CommitFocus::Submit => return self.submit(),
            KeyCode::Enter | KeyCode::Down => self.move_focus(true),
            KeyCode::Up | KeyCode::BackTab => self.move_focus(false),
            KeyCode::Tab => {
                if !self.accept_completion() {
                    self.move_focus(true);
                }
            }
            _ => match self.focus() {
                CommitFocus::Message => {
                    self.message_input.input(key);
                    self.hint = None;
                }
                CommitFocus::Flags => {
                    self.flags_input.input(key);
                }
                CommitFocus::Submit => {}
            },
        }
        Transition::Continue
    }
}
