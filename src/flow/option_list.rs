//! Filterable single-selection list used by the select steps.
//!
//! Exactly one visible row is highlighted at a time. Typing `/` starts a filter; while
//! the filter is being edited every key (Enter and Esc included) belongs to the
//! filter, so a confirm keystroke only selects when the list is being browsed.

use crate::core::state::ListOption;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Unfiltered,
    /// The filter text is being edited
    Filtering,
    /// A filter narrows the rows and the list is browsed again
    FilterApplied,
}

#[derive(Debug)]
pub struct OptionList<T> {
    title: &'static str,
    items: Vec<T>,
    filter: String,
    filter_state: FilterState,
    state: ListState,
}

impl<T: ListOption + Clone> OptionList<T> {
    pub fn new(title: &'static str, items: Vec<T>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            title,
            items,
            filter: String::new(),
            filter_state: FilterState::Unfiltered,
            state,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows matching the current filter, in configuration order
    pub fn visible_items(&self) -> Vec<&T> {
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|item| needle.is_empty() || item.title().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn highlighted(&self) -> Option<&T> {
        let index = self.state.selected()?;
        self.visible_items().get(index).copied()
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Feed a key to the list. Returns the option when a row is confirmed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<T> {
        if self.is_filtering() {
            self.handle_filter_key(key);
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('/') => {
                self.filter.clear();
                self.filter_state = FilterState::Filtering;
                self.reset_selection();
            }
            KeyCode::Enter | KeyCode::Char(' ') => return self.highlighted().cloned(),
            _ => {}
        }
        None
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.filter.clear();
                self.filter_state = FilterState::Unfiltered;
                self.reset_selection();
            }
            KeyCode::Enter => {
                self.filter_state = if self.filter.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::FilterApplied
                };
            }
            KeyCode::Backspace => {
                if self.filter.pop().is_none() {
                    self.filter_state = FilterState::Unfiltered;
                }
                self.reset_selection();
            }
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.filter.push(c);
                self.reset_selection();
            }
            _ => {}
        }
    }

    fn reset_selection(&mut self) {
        if self.visible_items().is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    fn select_previous(&mut self) {
        if let Some(index) = self.state.selected() {
            self.state.select(Some(index.saturating_sub(1)));
        }
    }

    fn select_next(&mut self) {
        let count = self.visible_items().len();
        if let Some(index) = self.state.selected() {
            if index + 1 < count {
                self.state.select(Some(index + 1));
            }
        }
    }

    fn select_first(&mut self) {
        self.reset_selection();
    }

    fn select_last(&mut self) {
        let count = self.visible_items().len();
        if count > 0 {
            self.state.select(Some(count - 1));
        }
    }
}
