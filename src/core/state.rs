//! Selectable options and the resolved configuration.
//!
//! # Public API
//! - [`ListOption`]: Display capability shared by everything shown in an option list
//! - [`BranchTypeOption`]: A branch type such as `FEAT` or `FIX`
//! - [`BoardOption`]: An issue-tracker board used to prefix ticket ids
//! - [`Configuration`]: The option lists for one process run
//!
//! Options are immutable once loaded and identified by their code.

/// Something that can be rendered as a row of an option list.
pub trait ListOption {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTypeOption {
    pub code: String,
    pub description: String,
}

impl BranchTypeOption {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl ListOption for BranchTypeOption {
    fn title(&self) -> &str {
        &self.code
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOption {
    pub code: String,
    pub description: String,
}

impl BoardOption {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Ticket id prefix used to pre-seed the ticket step, e.g. `IB-`
    pub fn ticket_prefix(&self) -> String {
        format!("{}-", self.code)
    }
}

impl ListOption for BoardOption {
    fn title(&self) -> &str {
        &self.code
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Option lists loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub branch_types: Vec<BranchTypeOption>,
    /// Empty means the board step is skipped
    pub boards: Vec<BoardOption>,
}

impl Configuration {
    /// Built-in branch types used when no config file exists or it lists none
    pub fn default_branch_types() -> Vec<BranchTypeOption> {
        vec![
            BranchTypeOption::new("FEAT", "A new feature"),
            BranchTypeOption::new("FIX", "A bug fix"),
            BranchTypeOption::new("IMPR", "An improvement to a feature or enhancement"),
            BranchTypeOption::new("OPS", "Changes to our CI configuration files and scripts"),
            BranchTypeOption::new(
                "CHORE",
                "Updating grunt tasks etc; no production code change",
            ),
        ]
    }

    /// Built-in boards, only used when no config file exists at all
    pub fn default_boards() -> Vec<BoardOption> {
        vec![
            BoardOption::new("EPD", "CPO team board"),
            BoardOption::new("IB", "Interim billing board"),
        ]
    }

    pub fn has_boards(&self) -> bool {
        !self.boards.is_empty()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            branch_types: Self::default_branch_types(),
            boards: Self::default_boards(),
        }
    }
}
